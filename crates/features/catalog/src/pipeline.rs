use crate::catalog::InfoCatalog;
use crate::error::CatalogError;
use crate::grouping::{ExperienceInfo, group};
use crate::icons::IconResolver;
use crate::observer::{InfoObserver, TracingObserver};
use crate::resolver::resolve;
use apb_domain::constants::LANGUAGES;
use apb_domain::experience::Experience;
use std::borrow::Cow;

/// Configured entry point of the info aggregation pipeline.
///
/// Holds only borrowed or immutable state, so one pipeline can serve any number of
/// concurrent [`InfoPipeline::build`] calls.
///
/// ```rust
/// use apb_catalog::{IconRegistry, InfoCatalog, InfoPipeline, SilentObserver};
/// use apb_domain::experience::Experience;
///
/// let icons = IconRegistry::lucide();
/// let pipeline = InfoPipeline::new(&icons).observer(SilentObserver);
///
/// let info = pipeline.build(&Experience::default(), &InfoCatalog::new()).unwrap();
/// assert!(info.is_empty());
/// ```
#[derive(Debug)]
pub struct InfoPipeline<'r, R: ?Sized, O = TracingObserver> {
    icons: &'r R,
    observer: O,
    language_key: Cow<'r, str>,
}

impl<'r, R: IconResolver + ?Sized> InfoPipeline<'r, R> {
    /// Pipeline reporting through [`TracingObserver`] with the `"languages"` sentinel.
    pub const fn new(icons: &'r R) -> Self {
        Self { icons, observer: TracingObserver, language_key: Cow::Borrowed(LANGUAGES) }
    }
}

impl<'r, R: IconResolver + ?Sized, O: InfoObserver> InfoPipeline<'r, R, O> {
    /// Replaces the diagnostics sink.
    pub fn observer<P: InfoObserver>(self, observer: P) -> InfoPipeline<'r, R, P> {
        InfoPipeline { icons: self.icons, observer, language_key: self.language_key }
    }

    /// Overrides the `main_id` that marks language facts.
    #[must_use]
    pub fn language_key(mut self, key: impl Into<Cow<'r, str>>) -> Self {
        self.language_key = key.into();
        self
    }

    /// Resolves `experience.info` against `catalog` and groups the result.
    ///
    /// # Errors
    /// Returns [`CatalogError::MalformedOrder`] when a resolved non-language record has a
    /// rank that is not an integer.
    pub fn build(
        &self,
        experience: &Experience,
        catalog: &InfoCatalog,
    ) -> Result<ExperienceInfo<R::Icon>, CatalogError> {
        let resolved = resolve(&experience.info, catalog, &self.observer);
        group(resolved, self.icons, &self.observer, &self.language_key)
    }
}

/// One-shot form of [`InfoPipeline::build`] with the default language sentinel.
///
/// # Errors
/// Returns [`CatalogError::MalformedOrder`] when a resolved non-language record has a
/// rank that is not an integer.
pub fn build_experience_info<R, O>(
    experience: &Experience,
    catalog: &InfoCatalog,
    icons: &R,
    observer: O,
) -> Result<ExperienceInfo<R::Icon>, CatalogError>
where
    R: IconResolver + ?Sized,
    O: InfoObserver,
{
    InfoPipeline::new(icons).observer(observer).build(experience, catalog)
}
