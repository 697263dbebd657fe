//! Static practice routing table.

use serde::Serialize;
use url::form_urlencoded;

/// Where a practice lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Practice identifier.
    pub id: &'static str,
    /// Destination page.
    pub path: &'static str,
    /// Value of the `type` query parameter, if any.
    pub practice_type: Option<&'static str>,
}

impl Route {
    const fn new(id: &'static str, path: &'static str, practice_type: Option<&'static str>) -> Self {
        Self {
            id,
            path,
            practice_type,
        }
    }

    /// Relative URL of the practice page.
    pub fn url(&self) -> String {
        match self.practice_type {
            Some(kind) => format!("{}?type={}", self.path, kind),
            None => self.path.to_string(),
        }
    }

    /// URL of the practice page under `base`.
    ///
    /// An empty base yields the relative URL.
    pub fn url_with_base(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            self.url()
        } else {
            format!("{}/{}", base, self.url())
        }
    }
}

const ANXIETY_RELIEF: &str = "anxiety_relief.html";
const MINDFUL_EATING: &str = "mindful_eating.html";

/// Every routed practice.
pub const ROUTES: [Route; 13] = [
    // breathing
    Route::new("breathing-4-7-8", ANXIETY_RELIEF, None),
    Route::new("breathing-box", ANXIETY_RELIEF, Some("box-breathing")),
    Route::new("breathing-alternate", ANXIETY_RELIEF, Some("alternate")),
    // body awareness
    Route::new("body-scan", ANXIETY_RELIEF, Some("body-scan")),
    Route::new("progressive-relaxation", ANXIETY_RELIEF, Some("muscle-relaxation")),
    Route::new("muscle-relaxation", ANXIETY_RELIEF, Some("muscle-relaxation")),
    // mindfulness
    Route::new("mindful-eating", MINDFUL_EATING, None),
    Route::new("mindful-breathing", ANXIETY_RELIEF, Some("mindful")),
    Route::new("grounding-5-4-3-2-1", ANXIETY_RELIEF, Some("grounding")),
    Route::new("grounding", ANXIETY_RELIEF, Some("grounding")),
    // emotion regulation
    Route::new("emotion-regulation", ANXIETY_RELIEF, Some("emotion")),
    Route::new("gratitude-practice", ANXIETY_RELIEF, Some("gratitude")),
    Route::new("self-compassion", ANXIETY_RELIEF, Some("self-compassion")),
];

/// Look up the route for a practice.
pub fn find_route(id: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.id == id)
}

/// Extract the practice `type` from a practice page URL.
///
/// Query values are percent-decoded and `+` reads as a space. An empty
/// value counts as absent.
pub fn practice_type_from_url(url: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "type")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
