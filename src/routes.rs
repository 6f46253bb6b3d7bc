use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::{
    AppState,
    error::AppResult,
    models::{AddForm, EditForm, IdQuery, NewMovie},
    ranking, templates, tmdb,
};

/// Load all records, recompute and persist rankings, render the list.
pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let mut movies = state.store.list_by_rating().await?;

    let rankings = ranking::assign_rankings(&movies);
    state.store.save_rankings(&rankings).await?;
    for (movie, &(_, rank)) in movies.iter_mut().zip(rankings.iter()) {
        movie.ranking = Some(rank);
    }

    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page("", None))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = form.title.trim();
    if title.is_empty() {
        return Ok(Html(templates::add_page(&form.title, Some("Movie title is required."))));
    }

    debug!(title = %title, "searching tmdb");
    let candidates = state.tmdb.search_movies(title).await?;
    Ok(Html(templates::select_page(title, &candidates)))
}

#[derive(Debug, serde::Deserialize)]
pub struct FindQuery {
    pub id: i64,
}

/// Fetch details for a selected TMDB result, create the record with rating
/// and review unset, then hand off to the edit form.
pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FindQuery>,
) -> AppResult<Redirect> {
    let details = state.tmdb.movie_details(q.id).await?;

    let year = match details.release_date.as_deref().filter(|s| !s.is_empty()) {
        Some(date) => tmdb::release_year(date)?,
        None => 0,
    };
    let new = NewMovie {
        title: details.title,
        year,
        description: details.overview.unwrap_or_default(),
        img_url: state.tmdb.poster_url(details.poster_path.as_deref()),
    };

    let id = state.store.insert(new).await?;
    debug!(id = id, "created movie from tmdb details");
    Ok(Redirect::to(&format!("/edit?id={id}")))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.id).await?;
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.clone().unwrap_or_default();
    Ok(Html(templates::edit_page(&movie, &rating, &review, &[])))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(q.id).await?;

    let mut errors = Vec::new();

    let rating = match form.rating.trim().parse::<f64>() {
        Ok(r) if (0.0..=10.0).contains(&r) => Some(r),
        Ok(_) => {
            errors.push("Rating must be between 0 and 10.".to_string());
            None
        }
        Err(_) => {
            errors.push("Rating must be a number, e.g. 7.5".to_string());
            None
        }
    };

    let review = form.review.trim();
    if review.is_empty() {
        errors.push("Review is required.".to_string());
    }

    let Some(rating) = rating.filter(|_| errors.is_empty()) else {
        let body = templates::edit_page(&movie, &form.rating, &form.review, &errors);
        return Ok(Html(body).into_response());
    };

    state.store.update_review(q.id, rating, review.to_string()).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.id).await?;
    debug!(id = q.id, "deleted movie");
    Ok(Redirect::to("/"))
}
