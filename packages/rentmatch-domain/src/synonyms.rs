/// A requested tag family and the substrings that satisfy any member of it.
#[derive(Debug, Clone, Copy)]
pub struct SynonymFamily {
	pub triggers: &'static [&'static str],
	pub needles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SynonymTable {
	families: &'static [SynonymFamily],
}
impl SynonymTable {
	pub const fn new(families: &'static [SynonymFamily]) -> Self {
		Self { families }
	}

	pub fn families(&self) -> &'static [SynonymFamily] {
		self.families
	}

	/// Tags outside every family fall back to plain substring containment.
	pub fn family_for(&self, requested: &str) -> Option<&'static SynonymFamily> {
		self.families.iter().find(|family| family.triggers.contains(&requested))
	}

	/// True when at least one of `tags` satisfies `requested` (case-insensitive). `requested` is
	/// trimmed before its family is looked up.
	pub fn satisfied_by(&self, requested: &str, tags: &[String]) -> bool {
		let requested = requested.trim().to_lowercase();
		let family = self.family_for(requested.as_str());

		tags.iter().any(|tag| {
			let tag = tag.to_lowercase();

			match family {
				Some(family) => family.needles.iter().any(|needle| tag.contains(needle)),
				None => tag.contains(requested.as_str()),
			}
		})
	}
}

pub const AMENITY_FAMILIES: &[SynonymFamily] = &[
	SynonymFamily { triggers: &["pool", "swimming pool"], needles: &["pool", "swimming"] },
	SynonymFamily { triggers: &["gym", "fitness"], needles: &["gym", "fitness"] },
	SynonymFamily { triggers: &["elevator", "lift"], needles: &["elevator", "lift"] },
];

pub const NEARBY_FAMILIES: &[SynonymFamily] =
	&[SynonymFamily { triggers: &["metro station"], needles: &["metro", "station"] }];

pub static AMENITIES: SynonymTable = SynonymTable::new(AMENITY_FAMILIES);
pub static NEARBY: SynonymTable = SynonymTable::new(NEARBY_FAMILIES);
