//! Catalog Service - movie and artist detail pages

use serde::Serialize;

use crate::domain::{
    Artist, ArtistRepository, CrewCredit, DomainError, FilmCredit, Movie, MovieRepository,
};

/// Credits sharing one role name
#[derive(Debug, Clone, Serialize)]
pub struct RoleGroup<T> {
    pub role: String,
    pub count: usize,
    pub credits: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    pub movie: Movie,
    pub crew: Vec<RoleGroup<CrewCredit>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub full_name: String,
    /// Sorted by appearance count, most frequent role first
    pub roles: Vec<RoleGroup<FilmCredit>>,
}

/// Groups credits by role name; groups appear in order of their first credit.
pub fn group_by_role<T>(credits: Vec<T>, role_of: impl Fn(&T) -> &str) -> Vec<RoleGroup<T>> {
    let mut groups: Vec<RoleGroup<T>> = Vec::new();

    for credit in credits {
        let role = role_of(&credit).to_string();
        match groups.iter_mut().find(|g| g.role == role) {
            Some(group) => group.credits.push(credit),
            None => groups.push(RoleGroup {
                role,
                count: 0,
                credits: vec![credit],
            }),
        }
    }

    for group in &mut groups {
        group.count = group.credits.len();
    }
    groups
}

pub async fn movie_detail(
    movies: &dyn MovieRepository,
    movie_id: i32,
) -> Result<MovieDetail, DomainError> {
    let movie = movies
        .find_by_id(movie_id)
        .await?
        .ok_or(DomainError::NotFound)?;
    let crew = movies.crew(movie_id).await?;

    Ok(MovieDetail {
        movie,
        crew: group_by_role(crew, |c| c.role.as_str()),
    })
}

pub async fn artist_detail(
    artists: &dyn ArtistRepository,
    artist_id: i32,
) -> Result<ArtistDetail, DomainError> {
    let artist = artists
        .find_by_id(artist_id)
        .await?
        .ok_or(DomainError::NotFound)?;
    let credits = artists.filmography(artist_id).await?;

    let mut roles = group_by_role(credits, |c| c.role.as_str());
    // Stable: equal counts keep first-appearance order
    roles.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(ArtistDetail {
        full_name: artist.full_name(),
        artist,
        roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_role_keeps_first_appearance_order() {
        let credits = vec![
            ("Director", 1),
            ("Actor", 2),
            ("Director", 3),
            ("Screenwriter", 4),
            ("Actor", 5),
        ];
        let groups = group_by_role(credits, |c| c.0);

        let roles: Vec<&str> = groups.iter().map(|g| g.role.as_str()).collect();
        assert_eq!(roles, vec!["Director", "Actor", "Screenwriter"]);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].credits, vec![("Director", 1), ("Director", 3)]);
        assert_eq!(groups[2].count, 1);
    }

    #[test]
    fn test_group_by_role_empty() {
        let groups = group_by_role(Vec::<(&str, i32)>::new(), |c| c.0);
        assert!(groups.is_empty());
    }
}
