use std::sync::Arc;

use rentmatch_domain::Listing;

/// The ingestion-side seam: hands out immutable catalog snapshots.
pub trait ListingProvider
where
	Self: Send + Sync,
{
	/// `None` while no snapshot has been loaded.
	fn all_listings(&self) -> Option<Arc<[Listing]>>;

	fn listing_by_id(&self, property_id: &str) -> Option<Listing>;
}

/// Snapshot-holding provider. Replacing the catalog swaps the shared slice; readers holding the
/// previous snapshot keep it unchanged.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
	snapshot: Option<Arc<[Listing]>>,
}
impl InMemoryCatalog {
	pub fn unloaded() -> Self {
		Self { snapshot: None }
	}

	pub fn new(listings: Vec<Listing>) -> Self {
		Self { snapshot: Some(listings.into()) }
	}

	/// Installs a fresh snapshot and returns the previous one.
	pub fn replace(&mut self, listings: Vec<Listing>) -> Option<Arc<[Listing]>> {
		self.snapshot.replace(listings.into())
	}

	pub fn is_loaded(&self) -> bool {
		self.snapshot.is_some()
	}

	pub fn len(&self) -> usize {
		self.snapshot.as_ref().map_or(0, |listings| listings.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
impl ListingProvider for InMemoryCatalog {
	fn all_listings(&self) -> Option<Arc<[Listing]>> {
		self.snapshot.clone()
	}

	fn listing_by_id(&self, property_id: &str) -> Option<Listing> {
		let wanted = property_id.trim();

		self.snapshot
			.as_ref()?
			.iter()
			.find(|listing| listing.property_id.trim() == wanted)
			.cloned()
	}
}
