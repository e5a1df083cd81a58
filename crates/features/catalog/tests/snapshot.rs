mod fixtures;

use apb_catalog::{DocumentSnapshot, ExperienceDetail, IconRegistry, InfoPipeline, SilentObserver};
use apb_domain::config::CatalogConfig;
use std::io::Write;

fn load() -> DocumentSnapshot {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", fixtures::snapshot()).unwrap();
    DocumentSnapshot::load(file.path()).unwrap()
}

#[test]
fn listing_skips_experiences_without_identity() {
    let snapshot = load();
    let experiences = snapshot.experiences(&CatalogConfig::default()).unwrap();

    let slugs: Vec<_> = experiences.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, ["cascada-escondida", "aventura-rio-claro"]);
    assert_eq!(experiences.search("río")[0].product_id, "p-2");
}

#[test]
fn detail_resolves_groups_and_orders_everything() {
    let snapshot = load();
    let config = CatalogConfig::default();
    let experiences = snapshot.experiences(&config).unwrap();
    let catalog = snapshot.info_catalog(&config).unwrap();
    let icons = IconRegistry::lucide();
    let pipeline = InfoPipeline::new(&icons).observer(SilentObserver);

    let experience = experiences.find_by_slug("cascada-escondida").unwrap();
    let detail = ExperienceDetail::build(experience, &pipeline, &catalog).unwrap();

    assert_eq!(detail.price, "$140.000");
    assert_eq!(detail.duration, "4 horas");
    assert_eq!(detail.location, "San Francisco, Cundinamarca");
    assert_eq!(detail.info.languages_spoken, ["Español", "Inglés"]);

    let sections: Vec<_> = detail
        .info
        .additional_info
        .iter()
        .map(|group| {
            let items: Vec<_> = group.items.iter().map(|item| item.icon).collect();
            (group.title.as_str(), group.order, items)
        })
        .collect();
    assert_eq!(sections, [("Incluye", 1, vec!["droplets", "users"]), ("Horario", 2, vec!["clock"])]);

    let plan: Vec<_> = detail.plan.iter().map(|step| step.title.as_str()).collect();
    assert_eq!(plan, ["Encuentro", "Caminata"]);
    assert_eq!(detail.attractions, ["Cascada de 40 metros", "Bosque de niebla"]);
    assert_eq!(detail.expectation_images.len(), 1);
}

#[test]
fn detail_serializes_info_inline() {
    let snapshot = load();
    let config = CatalogConfig::default();
    let experiences = snapshot.experiences(&config).unwrap();
    let catalog = snapshot.info_catalog(&config).unwrap();
    let icons = IconRegistry::lucide();
    let pipeline = InfoPipeline::new(&icons).observer(SilentObserver);

    let experience = experiences.find_by_slug("aventura-rio-claro").unwrap();
    let detail = ExperienceDetail::build(experience, &pipeline, &catalog).unwrap();
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["price"], "$210.000");
    assert_eq!(json["languagesSpoken"], serde_json::json!([]));
    assert_eq!(json["additionalInfo"], serde_json::json!([]));
    assert_eq!(json["meetingPoint"]["name"], "");
}

#[test]
fn fixture_catalog_validates_cleanly() {
    let snapshot = load();
    let catalog = snapshot.info_catalog(&CatalogConfig::default()).unwrap();

    assert_eq!(catalog.len(), 6);
    assert!(catalog.validate("languages").is_empty());
}

#[test]
fn other_projects_read_as_empty() {
    let snapshot = load();
    let config = CatalogConfig { project_id: "proj_missing".to_owned(), ..CatalogConfig::default() };

    assert!(snapshot.experiences(&config).unwrap().is_empty());
    assert!(snapshot.info_catalog(&config).unwrap().is_empty());
}
