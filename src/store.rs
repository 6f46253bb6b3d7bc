use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

const TITLE_MAX: usize = 80;
const DESCRIPTION_MAX: usize = 500;
const REVIEW_MAX: usize = 250;
const IMG_URL_MAX: usize = 280;

/// Owns all persistence for movie records. Handlers never touch the
/// connection directly.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<i32> {
        validate_new(&new)?;

        let existing = movie::Entity::find()
            .filter(movie::Column::Title.eq(new.title.as_str()))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::DuplicateTitle(new.title));
        }

        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(new.img_url),
        };

        let inserted = model.insert(&self.db).await?;
        Ok(inserted.id)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    /// All records, rating ascending. SQLite sorts NULL ratings first; ties
    /// are broken by ascending id so the ordering is deterministic.
    pub async fn list_by_rating(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by(movie::Column::Rating, Order::Asc)
            .order_by(movie::Column::Id, Order::Asc)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn update_review(&self, id: i32, rating: f64, review: String) -> AppResult<()> {
        if review.chars().count() > REVIEW_MAX {
            return Err(AppError::Validation(format!(
                "review must be at most {REVIEW_MAX} characters"
            )));
        }

        let model = self.get(id).await?;
        let mut active: movie::ActiveModel = model.into();
        active.rating = Set(Some(rating));
        active.review = Set(Some(review));
        active.update(&self.db).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Write-through persistence for recomputed rankings.
    pub async fn save_rankings(&self, rankings: &[(i32, i32)]) -> AppResult<()> {
        for &(id, rank) in rankings {
            let active = movie::ActiveModel {
                id: Set(id),
                ranking: Set(Some(rank)),
                ..Default::default()
            };
            movie::Entity::update(active).exec(&self.db).await?;
        }
        Ok(())
    }
}

fn validate_new(new: &NewMovie) -> AppResult<()> {
    if new.title.trim().is_empty() {
        return Err(AppError::Validation("title is required".to_string()));
    }
    if new.title.chars().count() > TITLE_MAX {
        return Err(AppError::Validation(format!(
            "title must be at most {TITLE_MAX} characters"
        )));
    }
    if new.description.trim().is_empty() {
        return Err(AppError::Validation("description is required".to_string()));
    }
    if new.description.chars().count() > DESCRIPTION_MAX {
        return Err(AppError::Validation(format!(
            "description must be at most {DESCRIPTION_MAX} characters"
        )));
    }
    if new.img_url.trim().is_empty() {
        return Err(AppError::Validation("image url is required".to_string()));
    }
    if new.img_url.chars().count() > IMG_URL_MAX {
        return Err(AppError::Validation(format!(
            "image url must be at most {IMG_URL_MAX} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;

    use super::*;

    async fn mem_store() -> MovieStore {
        let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        MovieStore::new(db)
    }

    fn sample(title: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            year: 2010,
            description: "A thief who steals corporate secrets.".to_string(),
            img_url: "https://image.tmdb.org/t/p/w500/inception.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = mem_store().await;
        let id = store.insert(sample("Inception")).await.unwrap();

        let movie = store.get(id).await.unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.description, "A thief who steals corporate secrets.");
        assert_eq!(movie.img_url, "https://image.tmdb.org/t/p/w500/inception.jpg");
        assert_eq!(movie.rating, None);
        assert_eq!(movie.review, None);
        assert_eq!(movie.ranking, None);
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected_and_not_persisted() {
        let store = mem_store().await;
        store.insert(sample("Inception")).await.unwrap();

        let err = store.insert(sample("Inception")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(ref t) if t == "Inception"));

        let all = store.list_by_rating().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let store = mem_store().await;
        let err = store.get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = mem_store().await;
        let id = store.insert(sample("Inception")).await.unwrap();

        store.delete(id).await.unwrap();
        assert!(matches!(store.get(id).await.unwrap_err(), AppError::NotFound));
        assert!(matches!(store.delete(id).await.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn empty_title_fails_validation() {
        let store = mem_store().await;
        let err = store.insert(sample("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn over_length_title_fails_validation() {
        let store = mem_store().await;
        let err = store.insert(sample(&"x".repeat(81))).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_review_sets_rating_and_review() {
        let store = mem_store().await;
        let id = store.insert(sample("Inception")).await.unwrap();

        store.update_review(id, 8.5, "Great".to_string()).await.unwrap();

        let movie = store.get(id).await.unwrap();
        assert_eq!(movie.rating, Some(8.5));
        assert_eq!(movie.review.as_deref(), Some("Great"));
    }

    #[tokio::test]
    async fn update_review_missing_id_is_not_found() {
        let store = mem_store().await;
        let err = store.update_review(7, 8.0, "x".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn movie_without_poster_gets_fallback_image_and_inserts() {
        let store = mem_store().await;
        let tmdb = crate::tmdb::TmdbClient::new(
            reqwest::Client::new(),
            "key".to_string(),
            "https://api.themoviedb.org/3".to_string(),
            "https://image.tmdb.org/t/p/w500".to_string(),
        );

        let new = NewMovie {
            title: "Obscure Title".to_string(),
            year: 2003,
            description: "Never got a poster.".to_string(),
            img_url: tmdb.poster_url(None),
        };

        let id = store.insert(new).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().img_url, "https://image.tmdb.org/t/p/w500");
    }

    #[tokio::test]
    async fn listing_ranks_highest_rating_first() {
        let store = mem_store().await;
        let a = store.insert(sample("A")).await.unwrap();
        let b = store.insert(sample("B")).await.unwrap();

        store.update_review(a, 9.0, "great".to_string()).await.unwrap();
        store.update_review(b, 5.0, "fine".to_string()).await.unwrap();

        let movies = store.list_by_rating().await.unwrap();
        let rankings = crate::ranking::assign_rankings(&movies);
        store.save_rankings(&rankings).await.unwrap();

        assert_eq!(store.get(a).await.unwrap().ranking, Some(1));
        assert_eq!(store.get(b).await.unwrap().ranking, Some(2));
    }

    #[tokio::test]
    async fn list_orders_by_rating_ascending_nulls_first() {
        let store = mem_store().await;
        let a = store.insert(sample("A")).await.unwrap();
        let b = store.insert(sample("B")).await.unwrap();
        let c = store.insert(sample("C")).await.unwrap();

        store.update_review(a, 9.0, "great".to_string()).await.unwrap();
        store.update_review(b, 5.0, "fine".to_string()).await.unwrap();

        let all = store.list_by_rating().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![c, b, a]);
    }
}
