use super::fixtures::{Request, ScriptedCatalog, id, targets};
use artistnet_core::fetching::{fetch_collaborators, fetch_related, merge_collaborators};
use artistnet_core::{CrawlConfig, crawl_network};

fn collaborating_network() -> ScriptedCatalog {
    ScriptedCatalog::new()
        .artist("A", "Alpha", 75)
        .artist("B", "Bravo", 80)
        .artist("C", "Charlie", 70)
        .artist("D", "Delta", 40)
        .artist("E", "Echo", 90)
        .related("A", &["B"])
        .track("A", "First", &["A", "C"])
        .track("A", "Second", &["C", "D", "B"])
        .track("A", "Third", &["E"])
}

#[test]
fn test_collaborators_in_first_credit_order() {
    let catalog = collaborating_network();

    let collaborators = fetch_collaborators(&catalog, &id("A"), 2).unwrap();

    let ids: Vec<String> = collaborators.iter().map(|c| c.id().to_string()).collect();
    assert_eq!(ids, vec!["C", "D", "B"]);
    assert!(collaborators.iter().all(|c| c.rank.is_none()));
}

#[test]
fn test_collaborators_looked_up_once_per_call() {
    let catalog = collaborating_network();

    fetch_collaborators(&catalog, &id("A"), 2).unwrap();

    assert_eq!(catalog.count(&Request::Artist("C".to_string())), 1);
    assert_eq!(catalog.count(&Request::Artist("A".to_string())), 0);
    assert_eq!(catalog.count(&Request::TopTracks("A".to_string())), 1);
}

#[test]
fn test_collaborator_track_limit() {
    let catalog = collaborating_network();

    let collaborators = fetch_collaborators(&catalog, &id("A"), 1).unwrap();

    let ids: Vec<String> = collaborators.iter().map(|c| c.id().to_string()).collect();
    assert_eq!(ids, vec!["C"]);
}

#[test]
fn test_merge_skips_collaborators_already_related() {
    let catalog = collaborating_network();
    let related = fetch_related(&catalog, &id("A"), 5).unwrap();
    let collaborators = fetch_collaborators(&catalog, &id("A"), 2).unwrap();

    let merged = merge_collaborators(related, collaborators);

    let ids: Vec<String> = merged.iter().map(|c| c.id().to_string()).collect();
    assert_eq!(ids, vec!["B", "C", "D"]);
    assert_eq!(merged[0].rank, Some(0));
}

#[test]
fn test_crawl_expands_through_collaborators() {
    let catalog = collaborating_network();
    let config = CrawlConfig::new(2, 50, None).with_collaborators(true);

    let result = crawl_network(&catalog, &id("A"), &config);

    // D is a collaborator but too unpopular, E is on a track past the limit
    assert_eq!(targets(&result.connections, "A"), vec!["B", "C"]);
    assert!(!result.metadata.contains_key(&id("D")));
    assert!(!result.metadata.contains_key(&id("E")));
}

#[test]
fn test_crawl_without_collaborators_skips_top_tracks() {
    let catalog = collaborating_network();
    let config = CrawlConfig::new(2, 50, None).with_collaborators(false);

    let result = crawl_network(&catalog, &id("A"), &config);

    assert_eq!(targets(&result.connections, "A"), vec!["B"]);
    assert_eq!(catalog.count(&Request::TopTracks("A".to_string())), 0);
}

#[test]
fn test_collaborator_edges_weigh_zero() {
    let catalog = collaborating_network();
    let config = CrawlConfig::new(2, 0, None)
        .with_collaborators(true)
        .with_weights(true);

    let result = crawl_network(&catalog, &id("A"), &config);

    let weights: Vec<(String, Option<u32>)> = result.connections[&id("A")]
        .iter()
        .map(|edge| (edge.target.to_string(), edge.weight))
        .collect();
    assert_eq!(
        weights,
        vec![
            ("B".to_string(), Some(2)),
            ("C".to_string(), Some(0)),
            ("D".to_string(), Some(0)),
        ]
    );
}

#[test]
fn test_no_duplicate_targets_within_expansion() {
    let catalog = collaborating_network();
    let config = CrawlConfig::new(3, 0, None).with_collaborators(true);

    let result = crawl_network(&catalog, &id("A"), &config);

    for edges in result.connections.values() {
        let mut seen: Vec<&str> = edges.iter().map(|edge| edge.target.as_str()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }
}
