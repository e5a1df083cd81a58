//! Icon lookup used by the grouping stage.
//!
//! Info records name their icon symbolically (`"Clock"`, `"MapPin"`). What an icon *is*
//! belongs to the presentation layer, so the pipeline only sees an [`IconResolver`] and
//! carries whatever `Icon` type the resolver hands back.

use fxhash::FxHashMap;
use std::borrow::Cow;

/// Resolves a symbolic icon name into a renderable icon.
pub trait IconResolver {
    type Icon;

    /// Returns `None` when the name is unknown; the caller decides how to degrade.
    fn resolve(&self, name: &str) -> Option<Self::Icon>;
}

impl<R: IconResolver + ?Sized> IconResolver for &R {
    type Icon = R::Icon;

    fn resolve(&self, name: &str) -> Option<Self::Icon> {
        (**self).resolve(name)
    }
}

/// Static name -> icon table. Lookups are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct IconRegistry<I> {
    icons: FxHashMap<Cow<'static, str>, I>,
}

impl<I> Default for IconRegistry<I> {
    fn default() -> Self {
        Self { icons: FxHashMap::default() }
    }
}

impl<I: Clone> IconRegistry<I> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, icon: I) -> Self {
        self.insert(name, icon);
        self
    }

    /// Adds or replaces an entry, returning the previous icon for that name.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, icon: I) -> Option<I> {
        self.icons.insert(name.into(), icon)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl<I: Clone> IconResolver for IconRegistry<I> {
    type Icon = I;

    fn resolve(&self, name: &str) -> Option<I> {
        self.icons.get(name).cloned()
    }
}

impl<N, I> FromIterator<(N, I)> for IconRegistry<I>
where
    N: Into<Cow<'static, str>>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        Self { icons: iter.into_iter().map(|(name, icon)| (name.into(), icon)).collect() }
    }
}

/// Icon component names used by catalog editors, with the matching Lucide icon slug.
pub const LUCIDE_ICONS: &[(&str, &str)] = &[
    ("Accessibility", "accessibility"),
    ("AlertTriangle", "alert-triangle"),
    ("Baby", "baby"),
    ("Backpack", "backpack"),
    ("Ban", "ban"),
    ("Bed", "bed"),
    ("Bike", "bike"),
    ("Bus", "bus"),
    ("Calendar", "calendar"),
    ("CalendarCheck", "calendar-check"),
    ("Camera", "camera"),
    ("Car", "car"),
    ("Check", "check"),
    ("CheckCircle", "check-circle"),
    ("Clock", "clock"),
    ("CloudRain", "cloud-rain"),
    ("Coffee", "coffee"),
    ("CreditCard", "credit-card"),
    ("Dog", "dog"),
    ("Droplets", "droplets"),
    ("Footprints", "footprints"),
    ("Heart", "heart"),
    ("Hourglass", "hourglass"),
    ("Info", "info"),
    ("Languages", "languages"),
    ("MapPin", "map-pin"),
    ("Mountain", "mountain"),
    ("Phone", "phone"),
    ("ShieldCheck", "shield-check"),
    ("Shirt", "shirt"),
    ("Sun", "sun"),
    ("Tent", "tent"),
    ("Ticket", "ticket"),
    ("Timer", "timer"),
    ("TreePine", "tree-pine"),
    ("Users", "users"),
    ("Utensils", "utensils"),
    ("UtensilsCrossed", "utensils-crossed"),
    ("Wallet", "wallet"),
    ("Wifi", "wifi"),
    ("Wine", "wine"),
    ("X", "x"),
    ("XCircle", "x-circle"),
];

impl IconRegistry<&'static str> {
    /// Registry of [`LUCIDE_ICONS`], resolving to Lucide slugs.
    #[must_use]
    pub fn lucide() -> Self {
        LUCIDE_ICONS.iter().copied().collect()
    }
}
