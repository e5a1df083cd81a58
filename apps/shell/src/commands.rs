use crate::cli::Command;
use anyhow::{Context, bail};
use apb::Catalogs;
use apb::catalog::{ExperienceDetail, IconRegistry, InfoPipeline};
use apb::domain::config::AppConfig;
use apb::domain::experience::Experience;
use apb::kernel::format::format_price;
use serde::Serialize;
use std::io::{self, Write};

/// Listing row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    product_id: &'a str,
    slug: &'a str,
    name: &'a str,
    location: String,
    price: String,
    image: &'a str,
}

impl<'a> From<&'a Experience> for Summary<'a> {
    fn from(experience: &'a Experience) -> Self {
        Self {
            product_id: &experience.product_id,
            slug: &experience.slug,
            name: &experience.name,
            location: experience.location(),
            price: format_price(experience.price.as_ref()),
            image: &experience.image,
        }
    }
}

pub(crate) fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let catalogs = apb::init(config).context("Loading catalogs")?;
    let mut out = io::stdout().lock();

    match command {
        Command::List { search } => {
            let needle = search.as_deref().unwrap_or_default();
            let rows: Vec<Summary<'_>> =
                catalogs.experiences.search(needle).into_iter().map(Summary::from).collect();
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        },
        Command::Show { slug } => {
            let Some(experience) = catalogs.experiences.find_by_slug(&slug) else {
                bail!("No experience with slug '{slug}'");
            };
            let icons = IconRegistry::lucide();
            let pipeline =
                InfoPipeline::new(&icons).language_key(config.catalog.language_key.as_str());
            let detail = ExperienceDetail::build(experience, &pipeline, &catalogs.info)
                .with_context(|| format!("Building detail of '{slug}'"))?;

            serde_json::to_writer_pretty(&mut out, &detail)?;
            writeln!(out)?;
        },
        Command::Check => check(&catalogs, config, &mut out)?,
    }

    Ok(())
}

fn check(catalogs: &Catalogs, config: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut problems = 0usize;

    for error in catalogs.info.validate(&config.catalog.language_key) {
        writeln!(out, "{error}")?;
        problems += 1;
    }

    for experience in catalogs.experiences.iter() {
        for (key, reference) in &experience.info {
            if catalogs.info.get(&reference.info_id).is_none() {
                writeln!(
                    out,
                    "Dangling reference '{key}' to '{}' in '{}'",
                    reference.info_id, experience.slug
                )?;
                problems += 1;
            }
        }
    }

    tracing::info!(problems, "Catalog check finished");
    if problems > 0 {
        bail!("{problems} catalog problem(s) found");
    }
    writeln!(out, "Catalog OK")?;
    Ok(())
}
