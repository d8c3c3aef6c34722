pub mod batch;
pub mod descriptor;
pub mod loaders;
pub mod molecule;
pub mod result;

pub use batch::BatchDefinition;
pub use descriptor::{DescriptorRequest, RemoteDescriptor};
pub use loaders::{load_all_batch_files, load_batch_from_toml};
pub use molecule::Molecule;
pub use result::{BatchOutcome, BatchResult, DescriptorResult, MoleculeResult};
