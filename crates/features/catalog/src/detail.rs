use crate::catalog::InfoCatalog;
use crate::error::CatalogError;
use crate::grouping::ExperienceInfo;
use crate::icons::IconResolver;
use crate::observer::InfoObserver;
use crate::pipeline::InfoPipeline;
use crate::plan::{PlanStep, attraction_reasons, expectation_images, ordered_plan};
use apb_domain::experience::Experience;
use apb_kernel::format::format_price;
use serde::Serialize;

/// Everything the detail page shows for one experience.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDetail<I> {
    pub product_id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub location: String,
    /// Formatted price, e.g. `$140.000`.
    pub price: String,
    /// `duration` and `duration_type` joined, e.g. `4 horas`.
    pub duration: String,
    pub meeting_point: MeetingPoint,
    pub maximum_visitors: u32,
    #[serde(flatten)]
    pub info: ExperienceInfo<I>,
    pub plan: Vec<PlanStep>,
    pub attractions: Vec<String>,
    pub expectations: String,
    pub expectation_images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingPoint {
    pub name: String,
    pub details: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl<I> ExperienceDetail<I> {
    /// Assembles the detail view.
    ///
    /// # Errors
    /// Returns [`CatalogError::MalformedOrder`] when an info record or plan step has an
    /// unparseable rank.
    pub fn build<R, O>(
        experience: &Experience,
        pipeline: &InfoPipeline<'_, R, O>,
        catalog: &InfoCatalog,
    ) -> Result<Self, CatalogError>
    where
        R: IconResolver<Icon = I> + ?Sized,
        O: InfoObserver,
    {
        let info = pipeline.build(experience, catalog)?;
        let plan = ordered_plan(experience)?;

        Ok(Self {
            product_id: experience.product_id.clone(),
            slug: experience.slug.clone(),
            name: experience.name.clone(),
            description: experience.description.clone(),
            image: experience.image.clone(),
            category: experience.category.clone(),
            location: experience.location(),
            price: format_price(experience.price.as_ref()),
            duration: join_words(&experience.duration, &experience.duration_type),
            meeting_point: MeetingPoint {
                name: experience.meeting_point.clone(),
                details: experience.meeting_point_details.clone(),
                time: experience.meeting_time.clone(),
                latitude: experience.meeting_point_latitude,
                longitude: experience.meeting_point_longitude,
            },
            maximum_visitors: experience.maximum_visitors,
            info,
            plan,
            attractions: attraction_reasons(experience),
            expectations: experience.expectations.clone(),
            expectation_images: expectation_images(experience),
        })
    }
}

fn join_words(first: &str, second: &str) -> String {
    match (first.trim(), second.trim()) {
        ("", other) | (other, "") => other.to_owned(),
        (a, b) => format!("{a} {b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_joins_non_blank_parts() {
        assert_eq!(join_words("4", "horas"), "4 horas");
        assert_eq!(join_words("4", " "), "4");
        assert_eq!(join_words("", "horas"), "horas");
        assert_eq!(join_words("", ""), "");
    }
}
