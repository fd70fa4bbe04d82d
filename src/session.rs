//! Dashboard Session
//!
//! Owns the dataset generated at load time, the static reference lists and
//! the category the user has selected. The selection is the only mutable
//! state; views are recomputed from it on demand.

use crate::view::{build_view, DashboardView};
use crate::vitals::{
    Category, DayCount, MockDataGenerator, ReferenceData, VitalsDataset, VitalsResult,
};

/// State for one dashboard session
#[derive(Debug, Clone)]
pub struct DashboardSession {
    dataset: VitalsDataset,
    reference: ReferenceData,
    selected: Category,
}

impl DashboardSession {
    /// Create a session over an existing dataset with the default reference data
    pub fn new(dataset: VitalsDataset) -> Self {
        Self {
            dataset,
            reference: ReferenceData::default(),
            selected: Category::default(),
        }
    }

    /// Generate a fresh dataset ending today. A `seed` makes it reproducible.
    pub fn load(days: DayCount, seed: Option<u64>) -> Self {
        let dataset = match seed {
            Some(seed) => MockDataGenerator::seeded(seed).generate_today(days),
            None => MockDataGenerator::from_entropy().generate_today(days),
        };

        tracing::info!(
            days = dataset.len(),
            seeded = seed.is_some(),
            "Loaded dashboard session"
        );

        Self::new(dataset)
    }

    /// Builder method: replace the reference data
    pub fn with_reference(mut self, reference: ReferenceData) -> Self {
        self.reference = reference;
        self
    }

    /// Builder method: set the initial category
    pub fn with_category(mut self, category: Category) -> Self {
        self.selected = category;
        self
    }

    pub fn dataset(&self) -> &VitalsDataset {
        &self.dataset
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    /// Switch category and return the recomputed view
    pub fn select(&mut self, category: Category) -> DashboardView {
        if category != self.selected {
            tracing::debug!(from = %self.selected, to = %category, "Category changed");
        }
        self.selected = category;
        self.view()
    }

    /// Switch category by token; unknown tokens leave the selection unchanged
    pub fn select_token(&mut self, token: &str) -> VitalsResult<DashboardView> {
        let category = token.parse::<Category>()?;
        Ok(self.select(category))
    }

    /// View for the current selection
    pub fn view(&self) -> DashboardView {
        build_view(&self.dataset, self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vitals::PatientProfile;

    #[test]
    fn test_load_defaults() {
        let session = DashboardSession::load(DayCount::default(), Some(4));
        assert_eq!(session.selected(), Category::Body);
        assert_eq!(session.dataset().len(), 14);
        assert!(session.dataset().is_aligned());
        assert_eq!(session.reference().appointments.len(), 2);
    }

    #[test]
    fn test_select_round_trip() {
        let mut session = DashboardSession::load(DayCount::default(), Some(4));
        let dataset_before = session.dataset().clone();

        let body = session.view();
        let mind = session.select(Category::Mind);
        assert_eq!(session.selected(), Category::Mind);
        assert_eq!(mind.cards[0].title, "Sleep Quality");

        let body_again = session.select(Category::Body);
        assert_eq!(body, body_again);
        assert_eq!(session.select(Category::Mind), mind);
        assert_eq!(session.dataset(), &dataset_before);
    }

    #[test]
    fn test_select_invalid_token() {
        let mut session =
            DashboardSession::load(DayCount::new(3).unwrap(), Some(1)).with_category(Category::Mind);

        let err = session.select_token("SOUL").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(session.selected(), Category::Mind);

        let view = session.select_token("body").unwrap();
        assert_eq!(view.category, Category::Body);
    }

    #[test]
    fn test_with_reference() {
        let reference = ReferenceData::default().with_profile(PatientProfile {
            name: "Grace".to_string(),
            age: 52,
        });
        let session = DashboardSession::load(DayCount::new(1).unwrap(), Some(2)).with_reference(reference);
        assert_eq!(session.reference().profile.name, "Grace");
    }
}
