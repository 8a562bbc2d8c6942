//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Paginated views go through the shared
//! [`Listing`](crate::listing::Listing) pipeline.

pub mod author_repo;
pub mod developer_repo;
pub mod game_genre_repo;
pub mod game_repo;
pub mod game_series_repo;
pub mod game_system_repo;
pub mod library_series_repo;
pub mod movie_genre_repo;
pub mod movie_repo;
pub mod movie_series_repo;
pub mod tag_repo;
pub mod user_repo;

pub use author_repo::AuthorRepo;
pub use developer_repo::DeveloperRepo;
pub use game_genre_repo::GameGenreRepo;
pub use game_repo::GameRepo;
pub use game_series_repo::GameSeriesRepo;
pub use game_system_repo::GameSystemRepo;
pub use library_series_repo::LibrarySeriesRepo;
pub use movie_genre_repo::MovieGenreRepo;
pub use movie_repo::MovieRepo;
pub use movie_series_repo::MovieSeriesRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
