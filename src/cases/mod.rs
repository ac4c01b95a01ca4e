/*! Case information

Raw cases as exported from the database, and their normalized counterpart.
!*/
mod case;
mod normalize;
mod raw;
mod reference;

pub use case::NormalizedCase;
pub use normalize::{format_article, format_parties, format_subarticle, split_list, Normalizer};
pub use raw::{Index, IndexEntry, RawCase};
pub use reference::{
    Country, OriginatingBody, ReferenceTables, COUNTRIES_FILE, ORIGINATING_BODIES_FILE,
};
