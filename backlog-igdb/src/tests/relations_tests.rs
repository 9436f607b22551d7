use super::*;

use crate::mock_catalog::{MockCatalog, company, named};

fn game() -> Candidate {
    Candidate {
        id: 1942,
        name: Some("The Witcher 3: Wild Hunt".into()),
        franchise: Some(452),
        franchises: vec![452, 600],
        collection: Some(104),
        collections: vec![105, 104],
        involved_companies: vec![1, 2, 3],
        ..Default::default()
    }
}

fn catalog() -> MockCatalog {
    MockCatalog {
        companies: vec![
            company(1, "CD Projekt RED", true, false),
            company(2, "CD Projekt", false, true),
            company(3, "Bandai Namco", false, true),
        ],
        franchises: vec![named(452, "The Witcher"), named(600, "")],
        collections: vec![named(104, "The Witcher"), named(105, "Witcher Saga")],
        ..MockCatalog::with_game(game())
    }
}

// -- Pure reductions --

#[test]
fn company_with_both_roles_appears_once_in_each_list() {
    let rows = vec![
        company(1, "Nintendo", true, true),
        company(2, "Nintendo", true, true),
        company(3, "Intelligent Systems", true, false),
    ];
    let roles = partition_companies(&rows);
    assert_eq!(roles.developers, vec!["Nintendo", "Intelligent Systems"]);
    assert_eq!(roles.publishers, vec!["Nintendo"]);
}

#[test]
fn companies_without_names_or_roles_are_skipped() {
    let mut unnamed = company(1, "", true, true);
    unnamed.company = None;
    let rows = vec![
        unnamed,
        company(2, "", true, true),
        company(3, "Porting House", false, false),
    ];
    let roles = partition_companies(&rows);
    assert!(roles.developers.is_empty());
    assert!(roles.publishers.is_empty());
}

#[test]
fn dedup_keeps_first_seen_order() {
    assert_eq!(dedup_names(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
}

#[test]
fn id_sets_union_primary_and_extra_ids() {
    let g = game();
    assert_eq!(franchise_ids(&g).into_iter().collect::<Vec<_>>(), vec![452, 600]);
    assert_eq!(series_ids(&g).into_iter().collect::<Vec<_>>(), vec![104, 105]);
    assert!(franchise_ids(&Candidate::default()).is_empty());
}

#[test]
fn entity_names_drop_empty() {
    let rows = vec![named(1, "Mario"), named(2, ""), NamedEntity { id: 3, name: None }];
    assert_eq!(entity_names(&rows), vec!["Mario"]);
}

// -- Aggregation --

#[tokio::test]
async fn aggregates_all_facets() {
    let catalog = catalog();
    let relations = aggregate_relations(&catalog, &game()).await;
    assert_eq!(relations.developers, vec!["CD Projekt RED"]);
    assert_eq!(relations.publishers, vec!["CD Projekt", "Bandai Namco"]);
    assert_eq!(relations.franchises, vec!["The Witcher"]);
    assert_eq!(relations.series, vec!["The Witcher", "Witcher Saga"]);
}

#[tokio::test]
async fn one_batch_request_per_facet_with_deduplicated_ids() {
    let catalog = catalog();
    aggregate_relations(&catalog, &game()).await;
    let mut calls = catalog.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            "collections:104,105",
            "franchises:452,600",
            "involved_companies:1,2,3",
        ]
    );
}

#[tokio::test]
async fn empty_id_sets_skip_their_lookup() {
    let catalog = catalog();
    let bare = Candidate {
        id: 1942,
        ..Default::default()
    };
    let relations = aggregate_relations(&catalog, &bare).await;
    assert_eq!(relations, Relations::default());
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn failed_facet_is_empty_and_others_survive() {
    let catalog = MockCatalog {
        fail_franchises: true,
        ..catalog()
    };
    let relations = aggregate_relations(&catalog, &game()).await;
    assert!(relations.franchises.is_empty());
    assert_eq!(relations.developers, vec!["CD Projekt RED"]);
    assert_eq!(relations.series.len(), 2);
}

#[tokio::test]
async fn failed_company_lookup_empties_both_role_lists() {
    let catalog = MockCatalog {
        fail_companies: true,
        ..catalog()
    };
    let relations = aggregate_relations(&catalog, &game()).await;
    assert!(relations.developers.is_empty());
    assert!(relations.publishers.is_empty());
    assert_eq!(relations.franchises, vec!["The Witcher"]);
}
