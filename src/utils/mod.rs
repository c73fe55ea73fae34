mod errors;

pub use errors::Error;

pub type FilmcatResult<T> = Result<T, Error>;
