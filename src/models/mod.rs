mod business;
mod review;
mod photo;

pub use business::BusinessRecord;
pub use review::ReviewRecord;
pub use photo::{photo_file_name, PhotoRecord};

/// One business entry of a page together with the records it fans out to.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBusiness {
    pub business: BusinessRecord,
    pub reviews: Vec<ReviewRecord>,
    pub photos: Vec<PhotoRecord>,
}

/// Records flattened from a single page of search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedPage {
    pub businesses: Vec<BusinessRecord>,
    pub reviews: Vec<ReviewRecord>,
    pub photos: Vec<PhotoRecord>,
}

/// Records accumulated across every location and offset of a harvest run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarvestOutput {
    pub businesses: Vec<BusinessRecord>,
    pub reviews: Vec<ReviewRecord>,
    pub photos: Vec<PhotoRecord>,
}

impl HarvestOutput {
    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty() && self.reviews.is_empty() && self.photos.is_empty()
    }
}
