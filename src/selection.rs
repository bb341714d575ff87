//! The user's current choice of dataset, variables and time range.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::{
    catalog::{self, Dataset, YEARS},
    error::SelectionError,
    expand::expand_links,
    period::{TimeRange, YearMonth},
};

#[derive(Debug)]
pub struct Selection {
    dataset: &'static Dataset,
    variables: Vec<String>,
    start: YearMonth,
    end: YearMonth,
    months: Option<BTreeSet<u32>>,
    links: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        let january_2023 = YearMonth::january(2023);

        Selection {
            dataset: catalog::default_dataset(),
            variables: Vec::new(),
            start: january_2023,
            end: january_2023,
            months: None,
            links: Vec::new(),
        }
    }
}

impl Selection {
    pub fn new(dataset_id: &str) -> Result<Self, SelectionError> {
        let mut selection = Selection::default();
        selection.set_dataset(dataset_id)?;

        Ok(selection)
    }

    pub fn dataset(&self) -> &'static Dataset {
        self.dataset
    }

    pub fn set_dataset(&mut self, dataset_id: &str) -> Result<(), SelectionError> {
        self.dataset = catalog::dataset(dataset_id)
            .ok_or_else(|| SelectionError::UnknownDataset(dataset_id.to_string()))?;

        Ok(())
    }

    /// Selected variable ids, in the order they were selected.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Selects `variable_id`, or deselects it if it is already selected.
    pub fn toggle_variable(&mut self, variable_id: &str) {
        if let Some(pos) = self.variables.iter().position(|v| v == variable_id) {
            self.variables.remove(pos);
        } else {
            self.variables.push(variable_id.to_string());
        }
    }

    /// Selects `variable_id` unless it is already selected.
    pub fn select_variable(&mut self, variable_id: &str) {
        if !self.variables.iter().any(|v| v == variable_id) {
            self.variables.push(variable_id.to_string());
        }
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    pub fn set_range(&mut self, start: YearMonth, end: YearMonth) {
        self.start = start;
        self.end = end;
    }

    /// Restricts generation to these calendar months of every year.
    pub fn set_months<I: IntoIterator<Item = u32>>(&mut self, months: I) {
        self.months = Some(months.into_iter().collect());
    }

    /// Includes every month of the range again.
    pub fn all_months(&mut self) {
        self.months = None;
    }

    /// The list produced by the last successful [`Selection::generate`].
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Validates the selection and replaces the generated list.
    ///
    /// The previous list is cleared first, so a failed generation leaves no
    /// stale links behind.
    pub fn generate(&mut self) -> Result<&[String], SelectionError> {
        self.links.clear();

        let range = self.validate()?;
        self.links = expand_links(self.dataset, &self.variables, &range, self.months.as_ref());

        info!(
            "Generated {} download links for {} ({})",
            self.links.len(),
            self.dataset.id,
            range
        );

        Ok(&self.links)
    }

    fn validate(&self) -> Result<TimeRange, SelectionError> {
        if self.variables.is_empty() {
            return Err(SelectionError::NoVariables);
        }

        let range = TimeRange::new(self.start, self.end)?;

        if let Some(months) = &self.months {
            if !range.months().any(|ym| months.contains(&ym.month())) {
                return Err(SelectionError::NoMonths);
            }
        }

        for variable in &self.variables {
            if self.dataset.variable(variable).is_none() {
                return Err(SelectionError::UnknownVariable {
                    dataset: self.dataset.id.to_string(),
                    variable: variable.clone(),
                });
            }
        }

        for year in [self.start.year(), self.end.year()] {
            if !YEARS.contains(&year) {
                return Err(SelectionError::YearOutOfRange(year));
            }
        }

        debug!("Selection is valid: {:?}", self.variables);

        Ok(range)
    }
}

// -- Tests -------------------------------------------------------------------
