use keluh_core::{api_models::Category, draft::CategoryDraft};

use crate::MockBackend;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleCategory {
    JalanRusak,
    Banjir,
    Sampah,
    LampuJalan,
}


impl SampleCategory {
    pub fn name(&self) -> &'static str {
        match self {
            SampleCategory::JalanRusak => "Jalan Rusak",
            SampleCategory::Banjir => "Banjir",
            SampleCategory::Sampah => "Sampah",
            SampleCategory::LampuJalan => "Lampu Jalan",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SampleCategory::JalanRusak => "Jalan berlubang",
            SampleCategory::Banjir => "Genangan air setelah hujan deras",
            SampleCategory::Sampah => "Tumpukan sampah di pinggir sungai",
            SampleCategory::LampuJalan => "Lampu penerangan jalan mati",
        }
    }

    pub fn draft(&self) -> CategoryDraft {
        CategoryDraft::new(self.name(), self.description())
    }
}


/// Inserts the given sample categories directly into the mock backend's storage,
/// in order, without going through the API.
pub fn seed_sample_categories(backend: &MockBackend, categories: &[SampleCategory]) -> Vec<Category> {
    categories
        .iter()
        .map(|category| backend.insert_category(category.name(), category.description()))
        .collect()
}
