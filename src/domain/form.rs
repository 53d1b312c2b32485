//! Idea Form
//!
//! Editing model for the create and edit screens. The user picks catalog
//! entries by name; the form keeps the picked `CatalogItem`s and only turns
//! them into ids when the request is built.

use super::catalog::{CatalogItem, CatalogKind};
use super::idea::{Idea, IdeaId, NewIdeaRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaForm {
    /// Id of the idea being edited (None = new idea)
    pub editing: Option<IdeaId>,
    pub title: String,
    pub description: String,
    pub resources_needed: String,
    pub category: Option<CatalogItem>,
    pub priority: Option<CatalogItem>,
    pub status: Option<CatalogItem>,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    /// All messages in field order
    pub fn messages(&self) -> Vec<&str> {
        [&self.title, &self.description, &self.category, &self.priority, &self.status]
            .into_iter()
            .filter_map(|msg| msg.as_deref())
            .collect()
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl IdeaForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill an edit form from a fetched idea.
    ///
    /// Catalog entries are pre-selected when their name matches the idea's
    /// string value; anything without a match stays unselected.
    pub fn for_idea(
        idea: &Idea,
        categories: &[CatalogItem],
        priorities: &[CatalogItem],
        statuses: &[CatalogItem],
    ) -> Self {
        let pick = |items: &[CatalogItem], name: &str| {
            items.iter().find(|item| item.matches_name(name)).cloned()
        };

        Self {
            editing: Some(idea.id),
            title: idea.title.clone(),
            description: idea.description.clone(),
            resources_needed: idea.resources_needed.clone(),
            category: pick(categories, &idea.category),
            priority: pick(priorities, &idea.priority),
            status: pick(statuses, &idea.status),
        }
    }

    pub fn select(&mut self, kind: CatalogKind, item: CatalogItem) {
        let slot = match kind {
            CatalogKind::Category => &mut self.category,
            CatalogKind::Priority => &mut self.priority,
            CatalogKind::Status => &mut self.status,
        };
        *slot = Some(item);
    }

    pub fn selected(&self, kind: CatalogKind) -> Option<&CatalogItem> {
        match kind {
            CatalogKind::Category => self.category.as_ref(),
            CatalogKind::Priority => self.priority.as_ref(),
            CatalogKind::Status => self.status.as_ref(),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let required = |value: &str, msg: &str| value.trim().is_empty().then(|| msg.to_string());
        let picked = |kind: CatalogKind| {
            self.selected(kind)
                .is_none()
                .then(|| format!("Select a {}", kind.label()))
        };

        FormErrors {
            title: required(&self.title, "Title is required"),
            description: required(&self.description, "Description is required"),
            category: picked(CatalogKind::Category),
            priority: picked(CatalogKind::Priority),
            status: picked(CatalogKind::Status),
        }
    }

    /// Build the write request, extracting ids from the picked entries
    pub fn to_request(&self) -> Result<NewIdeaRequest, FormErrors> {
        let errors = self.validate();
        match (&self.category, &self.priority, &self.status) {
            (Some(category), Some(priority), Some(status)) if errors.is_empty() => {
                Ok(NewIdeaRequest::new(
                    self.title.trim(),
                    self.description.trim(),
                    category.id,
                    priority.id,
                    status.id,
                    self.resources_needed.trim(),
                ))
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogs() -> (Vec<CatalogItem>, Vec<CatalogItem>, Vec<CatalogItem>) {
        (
            vec![CatalogItem::new(1, "ARTE"), CatalogItem::new(2, "MUSICA")],
            vec![CatalogItem::new(1, "ALTA"), CatalogItem::new(2, "BAJA")],
            vec![CatalogItem::new(3, "PENDIENTE")],
        )
    }

    fn sample_idea() -> Idea {
        Idea {
            id: 9,
            title: "Song".to_string(),
            description: "Write a chorus".to_string(),
            resources_needed: "Guitar".to_string(),
            created_at: "2024-01-01".to_string(),
            category: "musica".to_string(),
            priority: "URGENTE".to_string(),
            status: "PENDIENTE".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = IdeaForm::new().validate();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.description.as_deref(), Some("Description is required"));
        assert_eq!(errors.category.as_deref(), Some("Select a category"));
        assert_eq!(errors.priority.as_deref(), Some("Select a priority"));
        assert_eq!(errors.status.as_deref(), Some("Select a status"));
        assert_eq!(errors.messages().len(), 5);
    }

    #[test]
    fn test_whitespace_title_is_empty() {
        let form = IdeaForm {
            title: "   ".to_string(),
            ..IdeaForm::new()
        };
        assert!(form.validate().title.is_some());
    }

    #[test]
    fn test_to_request_extracts_ids() {
        let mut form = IdeaForm {
            title: "T".to_string(),
            description: "D".to_string(),
            resources_needed: "R".to_string(),
            ..IdeaForm::new()
        };
        form.select(CatalogKind::Category, CatalogItem::new(2, "MUSICA"));
        form.select(CatalogKind::Priority, CatalogItem::new(1, "ALTA"));
        form.select(CatalogKind::Status, CatalogItem::new(3, "PENDIENTE"));

        let request = form.to_request().expect("valid form");
        assert_eq!(request, NewIdeaRequest::new("T", "D", 2, 1, 3, "R"));
    }

    #[test]
    fn test_to_request_rejects_missing_selection() {
        let form = IdeaForm {
            title: "T".to_string(),
            description: "D".to_string(),
            category: Some(CatalogItem::new(1, "ARTE")),
            priority: Some(CatalogItem::new(1, "ALTA")),
            ..IdeaForm::new()
        };

        let errors = form.to_request().unwrap_err();
        assert_eq!(errors.messages(), vec!["Select a status"]);
    }

    #[test]
    fn test_for_idea_preselects_matching_names() {
        let (categories, priorities, statuses) = catalogs();
        let form = IdeaForm::for_idea(&sample_idea(), &categories, &priorities, &statuses);

        assert_eq!(form.editing, Some(9));
        assert_eq!(form.title, "Song");
        assert_eq!(form.category, Some(CatalogItem::new(2, "MUSICA")));
        // "URGENTE" is not in the priority catalog
        assert_eq!(form.priority, None);
        assert_eq!(form.status, Some(CatalogItem::new(3, "PENDIENTE")));
    }
}
