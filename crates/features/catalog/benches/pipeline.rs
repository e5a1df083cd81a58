use apb_catalog::{IconRegistry, InfoCatalog, InfoPipeline, SilentObserver};
use apb_domain::experience::Experience;
use apb_domain::info::{InfoRecord, InfoReference};
use apb_domain::rank::RawRank;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const ICONS: &[&str] = &["Clock", "Users", "MapPin", "Coffee", "Bus", "Unknown"];

fn catalog(size: usize) -> InfoCatalog {
    InfoCatalog::from_records((0..size).map(|i| InfoRecord {
        info_id: format!("info-{i:05}"),
        main_id: if i % 7 == 0 { "languages".to_owned() } else { "facilities".to_owned() },
        product_info_title: format!("Grupo {}", i % 9),
        product_info: format!("Dato {i}"),
        icon: ICONS[i % ICONS.len()].to_owned(),
        order: Some(RawRank::Text((i % 9).to_string())),
        item_order: Some(RawRank::Text((size - i).to_string())),
        ..InfoRecord::default()
    }))
}

fn experience(references: usize, catalog_size: usize) -> Experience {
    let mut experience = Experience::default();
    for slot in 0..references {
        // Every tenth reference dangles.
        let id = if slot % 10 == 9 {
            "missing".to_owned()
        } else {
            format!("info-{:05}", (slot * 31) % catalog_size)
        };
        experience.info.insert(format!("ref-{slot:04}"), InfoReference::new(id, "facilities"));
    }
    experience
}

fn bench_build_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_experience_info");

    let catalog = catalog(2_000);
    let icons = IconRegistry::lucide();
    let pipeline = InfoPipeline::new(&icons).observer(SilentObserver);

    for references in [8usize, 64, 512] {
        let experience = experience(references, catalog.len());

        group.throughput(Throughput::Elements(references as u64));
        group.bench_with_input(BenchmarkId::from_parameter(references), &experience, |b, e| {
            b.iter(|| pipeline.build(black_box(e), &catalog).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_info);
criterion_main!(benches);
