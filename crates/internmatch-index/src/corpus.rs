use std::collections::HashSet;
use std::path::Path;

use internmatch_core::catalog::CatalogReader;
use internmatch_core::error::{Error, Result};
use internmatch_core::normalize::normalize_opt;
use internmatch_core::stipend::parse_stipend;
use internmatch_core::traits::WeightingModel;
use internmatch_core::types::{Listing, ListingId, RawListing, SparseVector};

use crate::model::TfIdfModel;

/// The preprocessed catalog and its vectors. Built once, then only read.
pub struct CorpusIndex {
    listings: Vec<Listing>,
    model: Box<dyn WeightingModel>,
}

impl CorpusIndex {
    /// Reads the CSV catalog and the JSON model from disk and builds the index.
    pub fn open(catalog_path: &Path, model_path: &Path) -> Result<Self> {
        let model = TfIdfModel::load(model_path)?;
        let rows = CatalogReader::new().read_path(catalog_path)?;
        Self::build(rows, Box::new(model))
    }

    pub fn build(rows: Vec<RawListing>, model: Box<dyn WeightingModel>) -> Result<Self> {
        let ids = assign_ids(&rows)?;
        let listings: Vec<Listing> = rows
            .into_iter()
            .zip(ids)
            .map(|(row, id)| {
                let title = normalize_opt(row.title.as_deref());
                let company = normalize_opt(row.company.as_deref());
                let location = normalize_opt(row.location.as_deref());
                let stipend = parse_stipend(row.stipend.as_deref().unwrap_or(""));
                let combined_text = format!("{title} {company}");
                let vector = model.project(&combined_text);
                Listing { id, title, company, location, stipend, combined_text, vector }
            })
            .collect();

        let empty_vectors = listings.iter().filter(|l| l.vector.is_empty()).count();
        tracing::info!(listings = listings.len(), dim = model.dim(), empty_vectors, "corpus index built");
        Ok(Self { listings, model })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, i: usize) -> Option<&Listing> {
        self.listings.get(i)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Projects free text into the same space as the listing vectors.
    pub fn project(&self, text: &str) -> SparseVector {
        self.model.project(text)
    }
}

/// Source ids when every row has one, otherwise 1..N in row order.
/// A mix of present and missing ids, or a repeated id, is rejected.
fn assign_ids(rows: &[RawListing]) -> Result<Vec<ListingId>> {
    let with_id = rows.iter().filter(|r| r.id.is_some()).count();
    if with_id == 0 {
        return Ok((1..=rows.len() as ListingId).collect());
    }
    if with_id != rows.len() {
        return Err(Error::InvalidCatalog(format!(
            "{with_id} of {} rows carry an InternshipID; either all or none must",
            rows.len()
        )));
    }
    let mut seen = HashSet::with_capacity(rows.len());
    let mut ids = Vec::with_capacity(rows.len());
    for (row, id) in rows.iter().enumerate().filter_map(|(i, r)| r.id.map(|id| (i + 1, id))) {
        if !seen.insert(id) {
            return Err(Error::InvalidCatalog(format!("duplicate InternshipID {id} at row {row}")));
        }
        ids.push(id);
    }
    Ok(ids)
}
