pub mod codec;
pub mod error;
pub mod store;
pub mod types;

pub use codec::Registry;
pub use error::{ConvertError, Result};
pub use types::{ByteModel, Context, Direction, FormatMeta, InputSource, OutputDest};
