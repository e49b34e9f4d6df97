//! End-to-end extraction tests
//!
//! These run the full pipeline against snapshot fixtures and check the
//! documents written to disk.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wither_extractor::server::{
    Holder, MultiNoiseParameterList, NoiseHypercube, ParameterPoint, ParameterRange,
};
use wither_extractor::{
    ExtractionOrchestrator, ExtractorRegistry, Identifier, KeyPolicy, OutputWriter, Registry,
    RegistryEntry, RegistryKey, SnapshotServer,
};
use yare::parameterized;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

fn extract_fixture(name: &str) -> (TempDir, Vec<PathBuf>) {
    let server = SnapshotServer::from_path(&fixture(name)).expect("Failed to load fixture");
    let out = TempDir::new().unwrap();
    let written = ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), true))
        .expect("Extraction failed");
    (out, written)
}

fn point_cube() -> NoiseHypercube {
    let zero = ParameterRange::point(0);
    NoiseHypercube {
        temperature: zero,
        humidity: zero,
        continentalness: zero,
        erosion: zero,
        depth: zero,
        weirdness: zero,
        offset: 0,
    }
}

#[test]
fn test_writes_all_documents_in_order() {
    let (out, written) = extract_fixture("snapshot.json");

    assert_eq!(
        written,
        vec![
            out.path().join("chunk_status.json"),
            out.path().join("noise_parameters.json"),
            out.path().join("multi_noise.json"),
        ]
    );

    let leftovers: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "staging files left: {:?}", leftovers);
}

#[test]
fn test_chunk_status_document() {
    let (out, _) = extract_fixture("snapshot.json");
    assert_eq!(
        read_json(&out.path().join("chunk_status.json")),
        json!(["empty", "structure_starts", "biomes", "noise", "features", "full"])
    );
}

#[test]
fn test_noise_parameters_document() {
    let (out, _) = extract_fixture("snapshot.json");
    let doc = read_json(&out.path().join("noise_parameters.json"));

    assert_eq!(
        doc["temperature"],
        json!({ "first_octave": -10, "amplitudes": [1.5, 0.0, 1.0, 0.0, 0.0, 0.0] })
    );
    assert_eq!(doc["ridge"]["first_octave"], -7);
    assert_eq!(doc.as_object().unwrap().len(), 3);
}

#[test]
fn test_multi_noise_document() {
    let (out, _) = extract_fixture("snapshot.json");
    let doc = read_json(&out.path().join("multi_noise.json"));

    let lists: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(lists, vec!["nether", "overworld"]);

    assert_eq!(
        doc["overworld"]["minecraft:plains"],
        json!({
            "temperature": [-0.45, -0.15],
            "humidity": [-1.0, -0.35],
            "continentalness": [-0.11, 0.03],
            "erosion": [-1.0, -0.78],
            "depth": [0.0, 0.0],
            "weirdness": [-1.0, -0.9333],
            "offset": 0.0
        })
    );
    assert_eq!(doc["nether"]["minecraft:warped_forest"]["offset"], json!(0.375));
    assert_eq!(doc["overworld"]["minecraft:deep_dark"]["depth"], json!([1.1, 1.1]));
}

#[test]
fn test_cube_field_order_is_fixed() {
    let (out, _) = extract_fixture("snapshot.json");
    let doc = read_json(&out.path().join("multi_noise.json"));

    let fields: Vec<_> = doc["nether"]["minecraft:basalt_deltas"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(
        fields,
        vec![
            "temperature",
            "humidity",
            "continentalness",
            "erosion",
            "depth",
            "weirdness",
            "offset"
        ]
    );
}

#[test]
fn test_yaml_snapshot() {
    let (out, written) = extract_fixture("snapshot.yaml");
    assert_eq!(written.len(), 3);

    assert_eq!(
        read_json(&out.path().join("chunk_status.json")),
        json!(["empty", "full"])
    );
    assert_eq!(
        read_json(&out.path().join("multi_noise.json"))["nether"]["minecraft:crimson_forest"]
            ["temperature"],
        json!([0.4, 0.4])
    );
}

#[parameterized(
    chunk_status = { "chunk_status.json" },
    noise_parameters = { "noise_parameters.json" },
    multi_noise = { "multi_noise.json" },
)]
fn test_only_writes_selected_document(file_name: &str) {
    let server = SnapshotServer::from_path(&fixture("snapshot.json")).unwrap();
    let out = TempDir::new().unwrap();

    let written = ExtractionOrchestrator::new(ExtractorRegistry::default())
        .select(&[file_name.to_string()])
        .unwrap()
        .run(&server, &OutputWriter::new(out.path(), false))
        .unwrap();

    assert_eq!(written, vec![out.path().join(file_name)]);
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
}

#[test]
fn test_compact_output_is_single_line() {
    let server = SnapshotServer::from_path(&fixture("snapshot.json")).unwrap();
    let out = TempDir::new().unwrap();

    ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), false))
        .unwrap();

    let content = fs::read_to_string(out.path().join("chunk_status.json")).unwrap();
    assert!(!content.trim_end().contains('\n'));
}

#[test]
fn test_missing_registry_writes_nothing() {
    let json = r#"{ "chunk_status": [], "noise_parameters": [] }"#;
    let server = SnapshotServer::from_json_str(json).unwrap();
    let out = TempDir::new().unwrap();

    let err = ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), true))
        .unwrap_err();

    assert!(format!("{:#}", err).contains("multi_noise_biome_source_parameter_list"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_registries_produce_empty_documents() {
    let json = r#"{ "chunk_status": [], "noise_parameters": [], "multi_noise_parameter_lists": [] }"#;
    let server = SnapshotServer::from_json_str(json).unwrap();
    let out = TempDir::new().unwrap();

    ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), true))
        .unwrap();

    assert_eq!(read_json(&out.path().join("chunk_status.json")), json!([]));
    assert_eq!(read_json(&out.path().join("noise_parameters.json")), json!({}));
    assert_eq!(read_json(&out.path().join("multi_noise.json")), json!({}));
}

#[test]
fn test_direct_holder_fails_extraction() {
    let mut lists = Registry::new(RegistryKey::MULTI_NOISE_PARAMETER_LIST);
    lists.push(RegistryEntry::new(
        Identifier::vanilla("nether").unwrap(),
        MultiNoiseParameterList::new(vec![ParameterPoint {
            parameters: point_cube(),
            biome: Holder::Direct,
        }]),
    ));
    let server = SnapshotServer::from_json_str(r#"{ "chunk_status": [], "noise_parameters": [] }"#)
        .unwrap()
        .with_multi_noise_parameter_lists(lists);
    let out = TempDir::new().unwrap();

    let err = ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), true))
        .unwrap_err();

    assert!(format!("{:#}", err).contains("unregistered biome"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_duplicate_biomes_follow_key_policy() {
    let plains = Identifier::vanilla("plains").unwrap();
    let mut shifted = point_cube();
    shifted.offset = 2500;

    let mut lists = Registry::new(RegistryKey::MULTI_NOISE_PARAMETER_LIST);
    lists.push(RegistryEntry::new(
        Identifier::vanilla("overworld").unwrap(),
        MultiNoiseParameterList::new(vec![
            ParameterPoint {
                parameters: point_cube(),
                biome: Holder::Reference(plains.clone()),
            },
            ParameterPoint {
                parameters: shifted,
                biome: Holder::Reference(plains),
            },
        ]),
    ));
    let server = SnapshotServer::new().with_multi_noise_parameter_lists(lists);
    let selection = ["multi_noise.json".to_string()];

    let out = TempDir::new().unwrap();
    ExtractionOrchestrator::new(ExtractorRegistry::with_defaults(KeyPolicy::Overwrite))
        .select(&selection)
        .unwrap()
        .run(&server, &OutputWriter::new(out.path(), true))
        .unwrap();
    let doc = read_json(&out.path().join("multi_noise.json"));
    assert_eq!(doc["overworld"]["minecraft:plains"]["offset"], json!(0.25));

    let strict_out = TempDir::new().unwrap();
    let err = ExtractionOrchestrator::new(ExtractorRegistry::with_defaults(KeyPolicy::Reject))
        .select(&selection)
        .unwrap()
        .run(&server, &OutputWriter::new(strict_out.path(), true))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("overworld/minecraft:plains"));
}

#[test]
fn test_existing_outputs_survive_failed_run() {
    let out = TempDir::new().unwrap();
    let previous = out.path().join("chunk_status.json");
    fs::write(&previous, "[\"stale\"]").unwrap();

    let server = SnapshotServer::from_json_str(r#"{ "chunk_status": [{ "key": "minecraft:full" }] }"#)
        .unwrap();
    let result = ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), true));

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&previous).unwrap(), "[\"stale\"]");
}

#[test]
fn test_blocked_target_restores_previous_outputs() {
    let out = TempDir::new().unwrap();
    let previous = out.path().join("chunk_status.json");
    fs::write(&previous, "[\"stale\"]").unwrap();
    let blocker = out.path().join("noise_parameters.json");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("notes.txt"), "keep me").unwrap();

    let server = SnapshotServer::from_path(&fixture("snapshot.json")).unwrap();
    let result = ExtractionOrchestrator::new(ExtractorRegistry::default())
        .run(&server, &OutputWriter::new(out.path(), true));

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&previous).unwrap(), "[\"stale\"]");
    assert_eq!(fs::read_to_string(blocker.join("notes.txt")).unwrap(), "keep me");
    assert!(!out.path().join("multi_noise.json").exists());

    let mut names: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["chunk_status.json", "noise_parameters.json"]);
}
