use crate::entities::movie;

/// Assigns a dense rank over records already ordered by rating ascending:
/// the last record (highest rating) gets rank 1, the first gets rank N.
pub fn assign_rankings(ordered: &[movie::Model]) -> Vec<(i32, i32)> {
    let count = ordered.len() as i32;
    ordered.iter().enumerate().map(|(pos, m)| (m.id, count - pos as i32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i32, rating: Option<f64>) -> movie::Model {
        movie::Model {
            id,
            title: format!("movie-{id}"),
            year: 2000,
            description: "desc".to_string(),
            rating,
            ranking: None,
            review: None,
            img_url: "https://example.com/poster.jpg".to_string(),
        }
    }

    fn by_rating(mut movies: Vec<movie::Model>) -> Vec<movie::Model> {
        movies.sort_by(|a, b| {
            a.rating
                .partial_cmp(&b.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        movies
    }

    #[test]
    fn ranks_form_permutation_with_rank_one_at_max_rating() {
        let movies = by_rating(vec![
            movie(1, Some(7.2)),
            movie(2, Some(9.9)),
            movie(3, Some(1.0)),
            movie(4, Some(5.5)),
        ]);

        let assigned = assign_rankings(&movies);
        let mut ranks: Vec<i32> = assigned.iter().map(|&(_, r)| r).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        let top = assigned.iter().find(|&&(_, r)| r == 1).unwrap();
        assert_eq!(top.0, 2);
    }

    #[test]
    fn highest_rating_gets_rank_one_lowest_gets_count() {
        let movies = by_rating(vec![movie(1, Some(9.0)), movie(2, Some(5.0))]);

        let assigned = assign_rankings(&movies);
        assert_eq!(assigned, vec![(2, 2), (1, 1)]);
    }

    #[test]
    fn recalculation_is_idempotent() {
        let movies =
            by_rating(vec![movie(1, Some(3.0)), movie(2, Some(8.0)), movie(3, Some(6.0))]);

        assert_eq!(assign_rankings(&movies), assign_rankings(&movies));
    }

    #[test]
    fn unrated_movies_sort_first_and_get_the_worst_ranks() {
        let movies = by_rating(vec![movie(1, None), movie(2, Some(4.0)), movie(3, Some(8.0))]);

        let assigned = assign_rankings(&movies);
        assert_eq!(assigned, vec![(1, 3), (2, 2), (3, 1)]);
    }

    #[test]
    fn equal_ratings_break_ties_by_id() {
        let movies = by_rating(vec![movie(2, Some(7.0)), movie(1, Some(7.0))]);

        let assigned = assign_rankings(&movies);
        assert_eq!(assigned, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn empty_list_assigns_nothing() {
        assert!(assign_rankings(&[]).is_empty());
    }
}
