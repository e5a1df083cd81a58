use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn snapshot(dir: &TempDir) -> PathBuf {
    let document = json!({
        "projects": { "proj_rsK6jYGJzKf9mkbruz2oe6": { "data": {
            "experiences": {
                "e1": {
                    "product_id": "p-1",
                    "name": "Caminata a la cascada Escondida",
                    "slug": "cascada-escondida",
                    "zone": "San Francisco", "state": "Cundinamarca", "price": 140000,
                    "info": {
                        "r1": { "info_id": "i-es", "main_id": "languages" },
                        "r2": { "info_id": "i-guide", "main_id": "facilities" },
                        "r3": { "info_id": "i-gone", "main_id": "facilities" }
                    }
                },
                "e2": {
                    "product_id": "p-2",
                    "name": "Tour de Aventura en Río Claro",
                    "slug": "aventura-rio-claro",
                    "zone": "Río Claro", "state": "Antioquia", "price": "210000"
                }
            },
            "z_btc_info": {
                "i-es": { "main_id": "languages", "product_info": "Español" },
                "i-guide": {
                    "main_id": "facilities",
                    "product_info_title": "Incluye",
                    "product_info": "Guía local",
                    "icon": "Users", "order": "1", "item_order": "1"
                }
            }
        } } }
    });
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, document.to_string()).unwrap();
    path
}

fn appueblear(snapshot: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appueblear"));
    cmd.env_remove("RUST_LOG").arg("--snapshot").arg(snapshot);
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn list_prints_every_listable_experience() {
    let dir = TempDir::new().unwrap();
    let rows = stdout_json(appueblear(&snapshot(&dir)).arg("list"));

    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[0]["slug"], "cascada-escondida");
    assert_eq!(rows[0]["price"], "$140.000");
    assert_eq!(rows[1]["location"], "Río Claro, Antioquia");
}

#[test]
fn list_filters_by_search_term() {
    let dir = TempDir::new().unwrap();
    let rows = stdout_json(appueblear(&snapshot(&dir)).args(["list", "--search", "ANTIOQUIA"]));

    assert_eq!(rows, json!([{
        "productId": "p-2",
        "slug": "aventura-rio-claro",
        "name": "Tour de Aventura en Río Claro",
        "location": "Río Claro, Antioquia",
        "price": "$210.000",
        "image": ""
    }]));
}

#[test]
fn show_prints_the_detail_view() {
    let dir = TempDir::new().unwrap();
    let detail = stdout_json(appueblear(&snapshot(&dir)).args(["show", "cascada-escondida"]));

    assert_eq!(detail["languagesSpoken"], json!(["Español"]));
    assert_eq!(detail["additionalInfo"][0]["title"], "Incluye");
    assert_eq!(detail["additionalInfo"][0]["items"][0]["icon"], "users");
}

#[test]
fn show_unknown_slug_fails() {
    let dir = TempDir::new().unwrap();

    appueblear(&snapshot(&dir))
        .args(["show", "no-existe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No experience with slug 'no-existe'"));
}

#[test]
fn check_reports_dangling_references() {
    let dir = TempDir::new().unwrap();

    appueblear(&snapshot(&dir))
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Dangling reference 'r3' to 'i-gone' in 'cascada-escondida'"))
        .stderr(predicate::str::contains("1 catalog problem(s) found"));
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = TempDir::new().unwrap();

    appueblear(&dir.path().join("absent.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loading catalogs"));
}

#[test]
fn config_file_and_environment_are_layered() {
    let dir = TempDir::new().unwrap();
    let snapshot = snapshot(&dir);
    let config = dir.path().join("appueblear.toml");
    std::fs::write(
        &config,
        format!(
            "[catalog]\nsnapshot = {:?}\n\n[logging]\nlevel = \"warn\"\n",
            snapshot.display().to_string()
        ),
    )
    .unwrap();

    let rows = stdout_json(
        Command::new(env!("CARGO_BIN_EXE_appueblear")).arg("--config").arg(&config).arg("list"),
    );
    assert_eq!(rows.as_array().map(Vec::len), Some(2));

    let rows = stdout_json(
        Command::new(env!("CARGO_BIN_EXE_appueblear"))
            .env("APB__CATALOG__PROJECT_ID", "proj_other")
            .arg("--config")
            .arg(&config)
            .arg("list"),
    );
    assert_eq!(rows, json!([]));
}
