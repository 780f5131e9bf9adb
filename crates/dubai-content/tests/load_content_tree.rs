//! Integration test: load a content tree from disk.
//!
//! Builds a small site under a temporary directory with one file per
//! collection plus deliberately broken files, and checks that the load
//! report separates valid records, per-file failures and dangling
//! references.

use std::path::Path;

use dubai_content::{ContentConfig, ContentError, ContentLoader, RecordError};
use dubai_core::{Collection, RecordId};
use dubai_schema::{SchemaRegistry, ValidatedRecord, ViolationKind};

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

/// One valid record in every collection.
fn write_valid_site(root: &Path) {
    write(
        root,
        "projects/marina-heights.md",
        "---\ntitle: Marina Heights\nid: marina-heights\ndeveloper: Emaar\nstatus: ready\nfloors: 65\n---\n\nWaterfront tower.\n",
    );
    write(
        root,
        "developers/emaar.md",
        "---\ntitle: Emaar Properties\nid: emaar\nwebsite: https://www.emaar.com\ncredibility_score: 92\nlast_updated: 2026-01-15\n---\n",
    );
    write(
        root,
        "reports/q4-2025.yaml",
        "title: Q4 2025 Market Report\nid: q4-2025\nyear: 2025\nquarter: Q4\nsummary: Record volumes.\n",
    );
    write(
        root,
        "developer_reports/emaar-2026.md",
        concat!(
            "---\n",
            "title: Emaar Credit Report 2026\n",
            "id: emaar-2026\n",
            "developer_id: emaar\n",
            "rating: AAA\n",
            "risk_level: Minimal Risk\n",
            "summary: Strong.\n",
            "metrics:\n",
            "  financial_health: Strong\n",
            "  on_time_delivery: 95%\n",
            "  quality_assessment: Excellent\n",
            "  risk_profile: Low\n",
            "---\n",
        ),
    );
    write(
        root,
        "guides/golden-visa.json",
        r#"{"title": "Golden Visa", "id": "golden-visa", "category": "visa", "summary": "Eligibility.", "bullets": ["AED 2M property"]}"#,
    );
    write(
        root,
        "policies/dld/escrow.md",
        "---\ntitle: Escrow\nid: escrow\nauthority: DLD\nsection: DLD Regulations\nsummary: Escrow rules.\n---\n",
    );
}

fn load(root: &Path, config: ContentConfig) -> dubai_content::LoadReport {
    let registry = SchemaRegistry::new().unwrap();
    ContentLoader::new(&registry, config.with_content_dir(root))
        .load()
        .unwrap()
}

#[test]
fn test_clean_site_loads_every_collection() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_site(dir.path());

    let report = load(dir.path(), ContentConfig::default());
    assert!(report.is_clean(), "unexpected failures: {:?}", report.failures);
    for collection in Collection::all() {
        assert_eq!(report.set.count(*collection), 1, "{collection}");
    }

    let project = report
        .set
        .get(Collection::Projects, &RecordId::new("marina-heights"))
        .unwrap();
    assert!(project.path.ends_with("projects/marina-heights.md"));
    let ValidatedRecord::Project(p) = &project.record else {
        panic!("Expected Project");
    };
    assert_eq!(p.floors, Some(65.0));
}

#[test]
fn test_invalid_files_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_site(dir.path());
    write(
        dir.path(),
        "projects/sold-out.md",
        "---\ntitle: Sold Out\nid: sold-out\ndeveloper: Nakheel\nstatus: sold\n---\n",
    );
    write(dir.path(), "guides/broken.md", "---\ntitle: Broken\n");

    let report = load(dir.path(), ContentConfig::default());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.set.count(Collection::Projects), 1);

    let sold_out = report
        .failures
        .iter()
        .find(|f| f.path.ends_with("sold-out.md"))
        .unwrap();
    assert_eq!(sold_out.collection, Collection::Projects);
    match &sold_out.error {
        RecordError::Invalid(e) => {
            assert!(e
                .violations()
                .unwrap()
                .contains(ViolationKind::EnumValueNotAllowed, "/status"));
        }
        other => panic!("Expected Invalid, got: {other}"),
    }

    let broken = report
        .failures
        .iter()
        .find(|f| f.path.ends_with("broken.md"))
        .unwrap();
    assert!(matches!(
        broken.error,
        RecordError::Read(ContentError::UnterminatedFrontMatter { .. })
    ));
}

#[test]
fn test_duplicate_ids_within_collection() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_site(dir.path());
    write(
        dir.path(),
        "developers/z-emaar.md",
        "---\ntitle: Emaar again\nid: emaar\n---\n",
    );
    // Same id in a different collection is fine.
    write(
        dir.path(),
        "guides/emaar.md",
        "---\ntitle: Buying from Emaar\nid: emaar\nsummary: Tips.\n---\n",
    );

    let report = load(dir.path(), ContentConfig::default());
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0].error {
        RecordError::DuplicateId { id, first } => {
            assert_eq!(id.as_str(), "emaar");
            assert!(first.ends_with("developers/emaar.md"));
        }
        other => panic!("Expected DuplicateId, got: {other}"),
    }
    assert_eq!(report.set.count(Collection::Guides), 2);
}

#[test]
fn test_dangling_developer_reference() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_site(dir.path());
    write(
        dir.path(),
        "developer_reports/nakheel-2026.md",
        concat!(
            "---\n",
            "title: Nakheel Credit Report\n",
            "id: nakheel-2026\n",
            "developer_id: nakheel\n",
            "rating: A\n",
            "risk_level: Low Risk\n",
            "summary: Solid.\n",
            "metrics:\n",
            "  financial_health: Good\n",
            "  on_time_delivery: 85%\n",
            "  quality_assessment: Good\n",
            "  risk_profile: Low\n",
            "---\n",
        ),
    );

    let report = load(dir.path(), ContentConfig::default());
    assert!(report.failures.is_empty());
    assert_eq!(report.dangling.len(), 1);
    assert_eq!(report.dangling[0].target_id.as_str(), "nakheel");
    assert!(!report.is_clean());
    assert_eq!(report.problem_count(), 1);

    let unchecked = load(dir.path(), ContentConfig::default().with_reference_check(false));
    assert!(unchecked.dangling.is_empty());
    assert!(unchecked.is_clean());
}

#[test]
fn test_ignored_entries() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_site(dir.path());
    write(dir.path(), "projects/_draft.md", "---\ntitle: Draft\n---\n");
    write(dir.path(), "projects/_partials/card.md", "---\n---\n");
    write(dir.path(), "projects/notes.txt", "not content");
    write(dir.path(), "listings/villa.md", "---\ntitle: Villa\n---\n");
    write(dir.path(), "config.json", "{}");

    let report = load(dir.path(), ContentConfig::default());
    assert!(report.is_clean(), "unexpected failures: {:?}", report.failures);
    assert_eq!(report.set.len(), 6);
}

#[test]
fn test_configured_extensions_limit_formats() {
    let dir = tempfile::tempdir().unwrap();
    write_valid_site(dir.path());
    let config = ContentConfig {
        extensions: vec!["md".to_string()],
        ..ContentConfig::default()
    };

    let report = load(dir.path(), config);
    assert_eq!(report.set.count(Collection::Reports), 0);
    assert_eq!(report.set.count(Collection::Guides), 0);
    assert_eq!(report.set.count(Collection::Projects), 1);
}

#[test]
fn test_missing_content_dir() {
    let registry = SchemaRegistry::new().unwrap();
    let config = ContentConfig::default().with_content_dir("/nonexistent/content");
    let err = ContentLoader::new(&registry, config).load().unwrap_err();
    assert!(matches!(err, ContentError::MissingContentDir { .. }));
}
