//! Project grid filtering, modal navigation, and image-set resolution.

use crate::content::{FaqItem, ImageSets, Project};

pub const ALL_FILTER: &str = "all";
pub const ALL_CATEGORIES: &str = "All";
pub const PLACEHOLDER_IMAGE: &str = "/assets/common/placeholder.jpg";

pub fn filter_projects(projects: &[Project], filter: &str) -> Vec<Project> {
    if filter == ALL_FILTER {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|p| p.category == filter)
        .cloned()
        .collect()
}

pub fn default_image_url(id: u32) -> String {
    format!("/assets/Projects/project-{id}/main.jpg")
}

impl ImageSets {
    pub fn folder_for(&self, id: u32) -> Option<&str> {
        self.folders.get(&id).map(String::as_str)
    }

    pub fn images_for(&self, id: u32) -> Vec<String> {
        let Some(folder) = self.folder_for(id) else {
            log::warn!("No folder mapping found for project ID: {id}");
            return Vec::new();
        };
        match self.images.get(folder) {
            Some(images) if !images.is_empty() => images
                .iter()
                .map(|name| format!("/assets/Projects/{folder}/{name}"))
                .collect(),
            _ => {
                log::warn!("No images defined for project folder: {folder}");
                Vec::new()
            }
        }
    }

    pub fn has_images(&self, id: u32) -> bool {
        !self.images_for(id).is_empty()
    }
}

/// Images shown in the project modal: the project's own list, then its image
/// set, then its main image, then the placeholder.
pub fn resolve_images(project: &Project, sets: &ImageSets) -> Vec<String> {
    if !project.images.is_empty() {
        return project.images.clone();
    }
    let from_set = sets.images_for(project.id);
    if !from_set.is_empty() {
        return from_set;
    }
    vec![project
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())]
}

pub fn prepare_for_display(project: Project, sets: &ImageSets) -> Project {
    let image_url = project
        .image_url
        .clone()
        .or_else(|| Some(default_image_url(project.id)));
    let project = Project {
        image_url,
        ..project
    };
    let images = resolve_images(&project, sets);
    Project { images, ..project }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    Moved,
    Ignored,
}

impl ModalAction {
    pub fn prevent_default(key: &str) -> bool {
        matches!(key, "ArrowLeft" | "ArrowRight")
    }
}

/// Position of the full-screen modal within the currently listed projects.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalNav {
    projects: Vec<Project>,
    index: usize,
}

impl ModalNav {
    pub fn open(projects: Vec<Project>, selected_id: u32) -> Option<Self> {
        let index = projects.iter().position(|p| p.id == selected_id)?;
        Some(Self { projects, index })
    }

    pub fn current(&self) -> &Project {
        &self.projects[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// 1-based position and total, for the `i / n` counter.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.projects.len())
    }

    pub fn show_counter(&self) -> bool {
        self.projects.len() > 1
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.projects.len()
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn reselect(&mut self, id: u32) -> bool {
        match self.projects.iter().position(|p| p.id == id) {
            Some(i) => {
                self.index = i;
                true
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: &str) -> ModalAction {
        let moved = match key {
            "Escape" => return ModalAction::Close,
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => false,
        };
        if moved {
            ModalAction::Moved
        } else {
            ModalAction::Ignored
        }
    }
}

/// Applies a key press to the open modal in place, closing it on Escape.
/// Returns whether anything changed.
pub fn apply_key(nav: &mut Option<ModalNav>, key: &str) -> bool {
    let Some(current) = nav else {
        return false;
    };
    match current.handle_key(key) {
        ModalAction::Close => {
            *nav = None;
            true
        }
        ModalAction::Moved => true,
        ModalAction::Ignored => false,
    }
}

pub fn toggle_open(open: Option<u32>, id: u32) -> Option<u32> {
    if open == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// `All` followed by each category in order of first appearance.
pub fn faq_categories(items: &[FaqItem]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

pub fn filter_faqs(items: &[FaqItem], category: &str) -> Vec<FaqItem> {
    if category == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|f| f.category == category)
        .cloned()
        .collect()
}
