pub mod disambiguation;
pub mod link_resolver;
pub mod presentation;
pub mod resolution;
pub mod tmdb;

pub use disambiguation::Disambiguator;
pub use link_resolver::LinkResolver;
pub use presentation::{Presenter, TitleCard};
pub use resolution::ResolutionService;
pub use tmdb::{TmdbApi, TmdbClient};
