use super::fixtures::{Request, ScriptedCatalog, id, small_network};
use artistnet_core::persistence::{load_attributes, read_edgelist};
use artistnet_core::{ArtistGraph, ConfigError, CrawlConfig, MinerError, NetworkMiner, OutputTarget};
use tempfile::TempDir;

fn config() -> CrawlConfig {
    CrawlConfig::new(3, 50, None).with_collaborators(false)
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_writes_both_artifacts() {
    let dir = TempDir::new().unwrap();
    let miner = NetworkMiner::new(small_network(), config());
    let output = OutputTarget::new(dir.path(), Some("alpha".to_string()));

    let report = miner.write_edgelist(&id("A"), &output).unwrap();

    assert_eq!(report.edges_written, 4);
    assert_eq!(report.paths.edgelist, dir.path().join("alpha.edgelist"));
    assert_eq!(
        read_lines(&report.paths.edgelist),
        vec!["A B", "A D", "B E", "D F"]
    );

    let metadata = load_attributes(&report.paths.attributes).unwrap();
    assert_eq!(metadata, report.result.metadata);
}

#[test]
fn test_output_name_defaults_to_seed_name() {
    let dir = TempDir::new().unwrap();
    let catalog = small_network();
    let miner = NetworkMiner::new(&catalog, config());

    let report = miner
        .write_edgelist(&id("A"), &OutputTarget::new(dir.path(), None))
        .unwrap();

    assert_eq!(report.paths.edgelist, dir.path().join("Alpha.edgelist"));
    assert_eq!(report.paths.attributes, dir.path().join("Alpha_attributes.bin"));
    assert!(report.paths.attributes.exists());
    // one lookup for the name, one for the seed's attributes
    assert_eq!(catalog.count(&Request::Artist("A".to_string())), 2);
}

#[test]
fn test_edgelist_is_appended_across_runs() {
    let dir = TempDir::new().unwrap();
    let output = OutputTarget::new(dir.path(), Some("repeat".to_string()));

    NetworkMiner::new(small_network(), config())
        .write_edgelist(&id("A"), &output)
        .unwrap();
    let report = NetworkMiner::new(small_network(), config())
        .write_edgelist(&id("A"), &output)
        .unwrap();

    assert_eq!(read_lines(&report.paths.edgelist).len(), 8);
    assert_eq!(load_attributes(&report.paths.attributes).unwrap().len(), 5);
    assert_eq!(report.artists_stored, 5);
}

#[test]
fn test_second_seed_keeps_first_network_metadata() {
    let dir = TempDir::new().unwrap();
    let output = OutputTarget::new(dir.path(), Some("shared".to_string()));
    let other = ScriptedCatalog::new()
        .artist("X", "Xray", 80)
        .artist("Y", "Yankee", 90)
        .related("X", &["Y"]);

    NetworkMiner::new(small_network(), config())
        .write_edgelist(&id("A"), &output)
        .unwrap();
    let report = NetworkMiner::new(other, config())
        .write_edgelist(&id("X"), &output)
        .unwrap();

    assert_eq!(report.artists_stored, 7);
    let graph = ArtistGraph::load(&report.paths.attributes, &report.paths.edgelist).unwrap();
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.node_count(), 7);
    for (artist_id, attributes) in graph.nodes() {
        assert!(attributes.name().is_some(), "{} lost its metadata", artist_id);
    }
    assert_eq!(graph.label(&id("B")), "Bravo");
    assert_eq!(graph.label(&id("Y")), "Yankee");
}

#[test]
fn test_interrupted_crawl_is_still_persisted() {
    let dir = TempDir::new().unwrap();
    let catalog = small_network().fail(Request::Related("B".to_string()));
    let miner = NetworkMiner::new(catalog, config());

    let report = miner
        .write_edgelist(&id("A"), &OutputTarget::new(dir.path(), Some("partial".to_string())))
        .unwrap();

    assert!(report.result.stop_reason.is_interrupted());
    assert_eq!(read_lines(&report.paths.edgelist), vec!["A B", "A D"]);
    let metadata = load_attributes(&report.paths.attributes).unwrap();
    let ids: Vec<&str> = metadata.keys().map(|k| k.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "D"]);
}

#[test]
fn test_weighted_lines_have_three_fields() {
    let dir = TempDir::new().unwrap();
    let miner = NetworkMiner::new(small_network(), config().with_weights(true));

    let report = miner
        .write_edgelist(&id("A"), &OutputTarget::new(dir.path(), Some("weighted".to_string())))
        .unwrap();

    assert_eq!(
        read_lines(&report.paths.edgelist),
        vec!["A B 3", "A D 1", "B E 2", "D F 2"]
    );
    let records = read_edgelist(&report.paths.edgelist).unwrap();
    assert_eq!(records[0].weight, Some(3));
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let catalog = small_network();
    let miner = NetworkMiner::new(&catalog, CrawlConfig::new(0, 50, None));

    let result = miner.write_edgelist(&id("A"), &OutputTarget::new(dir.path(), Some("bad".to_string())));

    assert!(matches!(result, Err(MinerError::Config(ConfigError::ZeroBreadthLimit))));
    assert!(catalog.requests().is_empty());
    assert!(!dir.path().join("bad.edgelist").exists());
}

#[test]
fn test_failed_name_lookup_is_reported() {
    let dir = TempDir::new().unwrap();
    let catalog = small_network().fail(Request::Artist("A".to_string()));
    let miner = NetworkMiner::new(catalog, config());

    let result = miner.write_edgelist(&id("A"), &OutputTarget::new(dir.path(), None));

    assert!(matches!(result, Err(MinerError::OutputName(_))));
}

#[test]
fn test_persisted_network_loads_as_graph() {
    let dir = TempDir::new().unwrap();
    let miner = NetworkMiner::new(small_network(), config());

    let report = miner
        .write_edgelist(&id("A"), &OutputTarget::new(dir.path().join("nested"), Some("graph".to_string())))
        .unwrap();
    let graph = ArtistGraph::load(&report.paths.attributes, &report.paths.edgelist).unwrap();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.in_degree(&id("A")), 0);
    assert_eq!(graph.label(&id("E")), "Echo");
}
