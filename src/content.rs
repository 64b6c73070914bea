use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(not(feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "hydrate"))]
use crate::gallery::{filter_projects, prepare_for_display};

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

pub const PROJECTS_DOC: &str = "projects.json";
pub const IMAGE_SETS_DOC: &str = "image_sets.json";
pub const FAQS_DOC: &str = "faqs.json";
pub const ABOUT_DOC: &str = "about.json";
pub const GALLERY_DOC: &str = "gallery.json";

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub image_class: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectCatalog {
    filters: Vec<FilterOption>,
    projects: Vec<Project>,
}

/// Which image folder each project uses, and the images in each folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSets {
    pub folders: BTreeMap<u32, String>,
    pub images: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    DevOps,
    Mobile,
    Database,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
    pub category: SkillCategory,
}

impl Skill {
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub label: String,
    pub icon: String,
    pub value: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Achievement {
    pub fn display(&self) -> String {
        format!("{}{}{}", self.prefix, self.value, self.suffix)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutMe {
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub title: String,
    pub height: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content document not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {document}: {reason}")]
    Parse { document: String, reason: String },
    #[error("Duplicate id {id} in {document}")]
    DuplicateId { document: String, id: u32 },
}

/// Every id must be unique within its list.
pub fn ensure_unique_ids(
    document: &str,
    ids: impl IntoIterator<Item = u32>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                document: document.to_string(),
                id,
            });
        }
    }
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn parse_document<T: DeserializeOwned>(document: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        document: document.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(not(feature = "hydrate"))]
fn read_document<T: DeserializeOwned>(document: &str) -> Result<T, ContentError> {
    let file = Assets::get(document).ok_or_else(|| ContentError::NotFound(document.to_string()))?;
    parse_document(document, &file.data)
}

#[cfg(not(feature = "hydrate"))]
fn load_catalog() -> Result<ProjectCatalog, ContentError> {
    let catalog = read_document::<ProjectCatalog>(PROJECTS_DOC)?;
    ensure_unique_ids(PROJECTS_DOC, catalog.projects.iter().map(|p| p.id))?;
    Ok(catalog)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_filters() -> Result<Vec<FilterOption>, ContentError> {
    load_catalog().map(|c| c.filters)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_projects() -> Result<Vec<Project>, ContentError> {
    load_catalog().map(|c| c.projects)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_image_sets() -> Result<ImageSets, ContentError> {
    read_document(IMAGE_SETS_DOC)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_faqs() -> Result<Vec<FaqItem>, ContentError> {
    let faqs = read_document::<Vec<FaqItem>>(FAQS_DOC)?;
    ensure_unique_ids(FAQS_DOC, faqs.iter().map(|f| f.id))?;
    Ok(faqs)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_about() -> Result<AboutMe, ContentError> {
    read_document(ABOUT_DOC)
}

#[cfg(not(feature = "hydrate"))]
pub fn load_gallery() -> Result<Vec<GalleryImage>, ContentError> {
    let images = read_document::<Vec<GalleryImage>>(GALLERY_DOC)?;
    ensure_unique_ids(GALLERY_DOC, images.iter().map(|i| i.id))?;
    Ok(images)
}

/// Projects matching `filter`, ready for display: each carries an image url
/// and its resolved image list.
#[cfg(not(feature = "hydrate"))]
pub fn get_projects(filter: &str) -> Result<Vec<Project>, ContentError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(filter) {
        return Ok(r.clone());
    }
    let catalog = load_catalog()?;
    let image_sets = load_image_sets()?;
    let projects = filter_projects(&catalog.projects, filter)
        .into_iter()
        .map(|p| prepare_for_display(p, &image_sets))
        .collect::<Vec<_>>();
    // only cache known filters so arbitrary input can't grow the cache
    if catalog.filters.iter().any(|f| f.id == filter) {
        cache.insert(filter.to_string(), projects.clone());
    }
    Ok(projects)
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_documents_parse() {
        let projects = load_projects().expect("projects should load");
        assert!(!projects.is_empty());

        let filters = load_filters().expect("filters should load");
        assert_eq!(filters[0].id, "all");

        let faqs = load_faqs().expect("faqs should load");
        assert!(!faqs.is_empty());

        let about = load_about().expect("about should load");
        assert!(!about.skills.is_empty());
        assert!(!about.achievements.is_empty());

        let gallery = load_gallery().expect("gallery should load");
        assert!(!gallery.is_empty());

        let sets = load_image_sets().expect("image sets should load");
        assert!(!sets.folders.is_empty());
    }

    #[test]
    fn test_every_filter_has_projects() {
        let projects = load_projects().expect("projects should load");
        for filter in load_filters().expect("filters should load") {
            if filter.id == "all" {
                continue;
            }
            assert!(
                projects.iter().any(|p| p.category == filter.id),
                "no projects for filter {}",
                filter.id
            );
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(ensure_unique_ids("test", [1, 2, 3]).is_ok());
        assert_eq!(
            ensure_unique_ids("test", [1, 2, 1]),
            Err(ContentError::DuplicateId {
                document: "test".to_string(),
                id: 1
            })
        );
    }

    #[test]
    fn test_parse_error_names_document() {
        let err = parse_document::<Vec<FaqItem>>(FAQS_DOC, b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref document, .. } if document == FAQS_DOC));

        let err = read_document::<Vec<FaqItem>>("missing.json").unwrap_err();
        assert_eq!(err, ContentError::NotFound("missing.json".to_string()));
    }

    #[test]
    fn test_get_projects_prepared() {
        let all = get_projects("all").expect("all projects");
        assert_eq!(all.len(), load_projects().expect("projects").len());
        for p in &all {
            assert!(p.image_url.is_some());
            assert!(!p.images.is_empty());
        }

        let web = get_projects("web").expect("web projects");
        assert!(web.iter().all(|p| p.category == "web"));

        // Cached under the filter id
        assert!(GLOBAL_PROJECT_CACHE.contains_key("web"));
    }

    #[test]
    fn test_unknown_filter_not_cached() {
        let none = get_projects("no-such-category").expect("unknown filter");
        assert!(none.is_empty());
        assert!(!GLOBAL_PROJECT_CACHE.contains_key("no-such-category"));
    }

    #[test]
    fn test_achievement_display() {
        let a = Achievement {
            label: "Projects Completed".to_string(),
            icon: "mdi:rocket-launch".to_string(),
            value: 50,
            prefix: String::new(),
            suffix: "+".to_string(),
            description: None,
        };
        assert_eq!(a.display(), "50+");
    }
}
