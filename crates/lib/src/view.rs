use std::fmt;

use log::trace;

use crate::{Catalog, Dataset, FacilityRecord, collation::locale_compare};

/// The province currently chosen by the user, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Province(String),
}

impl Selection {
    /// Interprets raw user input. Blank input is the placeholder option.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Selection::None
        } else {
            Selection::Province(trimmed.to_string())
        }
    }

    /// Interprets user input against the listed provinces. A listed value is
    /// taken exactly as written, surrounding whitespace included; anything
    /// else goes through [`Selection::from_input`].
    pub fn resolve(input: &str, provinces: &[String]) -> Self {
        if !input.is_empty() && provinces.iter().any(|known| known == input) {
            Selection::Province(input.to_string())
        } else {
            Selection::from_input(input)
        }
    }

    pub fn province(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Province(province) => Some(province),
        }
    }
}

/// Records of the selected province, ordered by facility name.
///
/// Matching is exact equality on the province. The sort is stable, so
/// facilities with the same name keep their dataset order.
pub fn filter_by_province<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
) -> Vec<&'a FacilityRecord> {
    let records = dataset.records();
    filtered_indices(dataset, selection)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

fn filtered_indices(dataset: &Dataset, selection: &Selection) -> Vec<usize> {
    let Some(province) = selection.province() else {
        return Vec::new();
    };

    let records = dataset.records();
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.province.as_deref() == Some(province))
        .map(|(idx, _)| idx)
        .collect();
    indices.sort_by(|&a, &b| {
        locale_compare(records[a].facility_name(), records[b].facility_name())
    });
    indices
}

/// What the content area shows for a given selection.
#[derive(Debug, PartialEq)]
pub enum ViewContent<'a> {
    /// No province selected: nothing is shown.
    Idle,
    /// A province is selected but it has no facilities.
    NotFound,
    Facilities(Vec<&'a FacilityRecord>),
}

impl<'a> ViewContent<'a> {
    pub fn for_selection(dataset: &'a Dataset, selection: &Selection) -> Self {
        if *selection == Selection::None {
            return ViewContent::Idle;
        }

        let filtered = filter_by_province(dataset, selection);
        if filtered.is_empty() {
            ViewContent::NotFound
        } else {
            ViewContent::Facilities(filtered)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownProvince(String),
    IndexOutOfRange(usize),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownProvince(province) => {
                write!(f, "Unknown province: {}", province)
            }
            SelectionError::IndexOutOfRange(index) => {
                write!(f, "No province at position {}", index)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Province selector bound to a loaded catalog.
///
/// The filtered facility list is recomputed on every accepted selection
/// change, so [`ProvinceView::content`] never reflects an older selection.
#[derive(Debug)]
pub struct ProvinceView {
    catalog: Catalog,
    selection: Selection,
    filtered: Vec<usize>,
}

impl ProvinceView {
    pub fn new(catalog: Catalog) -> Self {
        ProvinceView {
            catalog,
            selection: Selection::None,
            filtered: Vec::new(),
        }
    }

    pub fn provinces(&self) -> &[String] {
        self.catalog.provinces()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replaces the current selection. Only the placeholder or a province
    /// from the province list is accepted; a rejected value leaves the
    /// previous selection in place.
    pub fn select(&mut self, selection: Selection) -> Result<(), SelectionError> {
        if let Selection::Province(province) = &selection {
            if !self.provinces().iter().any(|known| known == province) {
                return Err(SelectionError::UnknownProvince(province.clone()));
            }
        }

        trace!("Selection changed: {:?} -> {:?}", self.selection, selection);
        self.selection = selection;
        self.recompute();
        Ok(())
    }

    /// Selects by 1-based position in the province list, 0 being the
    /// placeholder.
    pub fn select_index(&mut self, index: usize) -> Result<(), SelectionError> {
        if index == 0 {
            return self.select(Selection::None);
        }
        let province = self
            .provinces()
            .get(index - 1)
            .cloned()
            .ok_or(SelectionError::IndexOutOfRange(index))?;
        self.select(Selection::Province(province))
    }

    pub fn content(&self) -> ViewContent<'_> {
        if self.selection == Selection::None {
            return ViewContent::Idle;
        }

        let records = self.catalog.dataset().records();
        if self.filtered.is_empty() {
            ViewContent::NotFound
        } else {
            ViewContent::Facilities(self.filtered.iter().map(|&idx| &records[idx]).collect())
        }
    }

    fn recompute(&mut self) {
        self.filtered = filtered_indices(self.catalog.dataset(), &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn record(province: &str, name: &str) -> FacilityRecord {
        FacilityRecord {
            province: Some(province.to_string()),
            facility_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("Roma", "Bravo"),
            record("Roma", "Alpha"),
            record("Milano", "Zeta"),
        ])
    }

    fn names(records: &[&FacilityRecord]) -> Vec<String> {
        records
            .iter()
            .map(|record| record.facility_name().to_string())
            .collect()
    }

    fn roma() -> Selection {
        Selection::Province("Roma".to_string())
    }

    #[test]
    fn filters_and_sorts_selected_province() {
        let dataset = sample();
        let filtered = filter_by_province(&dataset, &roma());
        assert_eq!(names(&filtered), vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn unknown_province_yields_empty_result() {
        let dataset = sample();
        let torino = Selection::Province("Torino".to_string());

        assert!(filter_by_province(&dataset, &torino).is_empty());
        assert_eq!(ViewContent::for_selection(&dataset, &torino), ViewContent::NotFound);
    }

    #[test]
    fn no_selection_yields_idle_view() {
        let dataset = sample();
        assert!(filter_by_province(&dataset, &Selection::None).is_empty());
        assert_eq!(ViewContent::for_selection(&dataset, &Selection::None), ViewContent::Idle);
        assert!(filter_by_province(&Dataset::empty(), &Selection::None).is_empty());
    }

    #[test]
    fn result_holds_exactly_the_matching_records() {
        let dataset = Dataset::from_records(vec![
            record("Roma", "Umberto I"),
            record("roma", "Gemelli"),
            record("Roma ", "Sant'Eugenio"),
            record("Roma", "Grassi"),
            FacilityRecord::default(),
            record("Latina", "Goretti"),
        ]);
        let filtered = filter_by_province(&dataset, &roma());

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.province() == "Roma"));
        let expected = dataset
            .records()
            .iter()
            .filter(|r| r.province() == "Roma")
            .count();
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn result_is_ordered_by_locale() {
        let dataset = Dataset::from_records(vec![
            record("Napoli", "ospedale del Mare"),
            record("Napoli", "Cardarelli"),
            record("Napoli", "Èlite Clinic"),
            record("Napoli", "Evangelico Betania"),
            record("Napoli", "AORN Santobono"),
            record("Napoli", "Federico II"),
        ]);
        let filtered = filter_by_province(&dataset, &Selection::Province("Napoli".into()));

        assert_eq!(
            names(&filtered),
            vec![
                "AORN Santobono",
                "Cardarelli",
                "Èlite Clinic",
                "Evangelico Betania",
                "Federico II",
                "ospedale del Mare",
            ]
        );
        for pair in filtered.windows(2) {
            assert_ne!(
                locale_compare(pair[0].facility_name(), pair[1].facility_name()),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn equal_names_keep_dataset_order() {
        let mut first = record("Bari", "Policlinico");
        first.address = Some("Piazza Giulio Cesare 11".to_string());
        let mut second = record("Bari", "Policlinico");
        second.address = Some("Via Amendola 207".to_string());
        let dataset = Dataset::from_records(vec![first, record("Bari", "Di Venere"), second]);

        let filtered = filter_by_province(&dataset, &Selection::Province("Bari".into()));
        let addresses: Vec<_> = filtered.iter().map(|r| r.address()).collect();
        assert_eq!(addresses, vec!["", "Piazza Giulio Cesare 11", "Via Amendola 207"]);
    }

    #[test]
    fn filtering_is_repeatable() {
        let dataset = sample();
        assert_eq!(
            filter_by_province(&dataset, &roma()),
            filter_by_province(&dataset, &roma())
        );
    }

    #[test]
    fn selection_from_input() {
        assert_eq!(Selection::from_input(""), Selection::None);
        assert_eq!(Selection::from_input("   \n"), Selection::None);
        assert_eq!(Selection::from_input(" Roma\n"), roma());
    }

    #[test]
    fn resolve_prefers_listed_value_over_trimmed_input() {
        let dataset = Dataset::from_records(vec![
            record("Roma ", "Sant'Eugenio"),
            record("Milano", "Niguarda"),
        ]);
        let catalog = Catalog::new(dataset.clone());

        let selection = Selection::resolve("Roma ", catalog.provinces());
        assert_eq!(selection, Selection::Province("Roma ".to_string()));
        assert_eq!(names(&filter_by_province(&dataset, &selection)), vec!["Sant'Eugenio"]);

        let mut view = ProvinceView::new(catalog);
        view.select(Selection::resolve("Roma ", view.provinces())).unwrap();
        assert!(matches!(view.content(), ViewContent::Facilities(_)));

        assert_eq!(Selection::resolve(" Milano ", view.provinces()), Selection::Province("Milano".into()));
        assert_eq!(Selection::resolve("  ", view.provinces()), Selection::None);
    }

    #[test]
    fn view_recomputes_on_selection_change() {
        let mut view = ProvinceView::new(Catalog::new(sample()));
        assert_eq!(view.content(), ViewContent::Idle);
        assert_eq!(view.provinces(), ["Milano", "Roma"]);

        view.select(roma()).unwrap();
        match view.content() {
            ViewContent::Facilities(records) => assert_eq!(names(&records), vec!["Alpha", "Bravo"]),
            other => panic!("unexpected content: {:?}", other),
        }

        view.select(Selection::Province("Milano".into())).unwrap();
        match view.content() {
            ViewContent::Facilities(records) => assert_eq!(names(&records), vec!["Zeta"]),
            other => panic!("unexpected content: {:?}", other),
        }

        view.select(Selection::None).unwrap();
        assert_eq!(view.content(), ViewContent::Idle);
    }

    #[test]
    fn view_rejects_unknown_province() {
        let mut view = ProvinceView::new(Catalog::new(sample()));
        view.select(roma()).unwrap();

        let err = view
            .select(Selection::Province("Torino".into()))
            .unwrap_err();
        assert_eq!(err, SelectionError::UnknownProvince("Torino".to_string()));
        assert_eq!(view.selection(), &roma());
    }

    #[test]
    fn view_selects_by_index() {
        let mut view = ProvinceView::new(Catalog::new(sample()));

        view.select_index(2).unwrap();
        assert_eq!(view.selection(), &roma());

        assert_eq!(view.select_index(3), Err(SelectionError::IndexOutOfRange(3)));
        assert_eq!(view.selection(), &roma());

        view.select_index(0).unwrap();
        assert_eq!(view.selection(), &Selection::None);
    }

    #[test]
    fn empty_catalog_offers_only_placeholder() {
        let mut view = ProvinceView::new(Catalog::default());
        assert!(view.provinces().is_empty());
        assert_eq!(view.content(), ViewContent::Idle);
        assert!(view.select(roma()).is_err());
        assert!(view.select(Selection::None).is_ok());
    }
}
