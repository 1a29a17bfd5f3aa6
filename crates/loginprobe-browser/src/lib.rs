mod chrome_finder;
mod error;
mod page;
mod profile;
mod session;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use profile::ProfileDir;
pub use session::{ChromeSession, PAGE_LOAD_TIMEOUT};
