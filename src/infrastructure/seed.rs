use crate::infrastructure::auth::hash_password;
use crate::models::{artist, movie, movie_crew, role, user};
use sea_orm::*;

struct DemoMovie {
    title: &'static str,
    year: i32,
    genre: &'static str,
    duration: i32,
    price: i32,
    description: &'static str,
}

const MOVIES: &[DemoMovie] = &[
    DemoMovie {
        title: "Сталкер",
        year: 1979,
        genre: "драма",
        duration: 163,
        price: 450,
        description: "Проводник ведёт Писателя и Профессора через Зону к Комнате.",
    },
    DemoMovie {
        title: "Москва слезам не верит",
        year: 1979,
        genre: "мелодрама",
        duration: 150,
        price: 300,
        description: "Три подруги приезжают покорять Москву.",
    },
    DemoMovie {
        title: "Брат",
        year: 1997,
        genre: "криминал",
        duration: 100,
        price: 350,
        description: "Демобилизованный Данила Багров едет к старшему брату в Петербург.",
    },
    DemoMovie {
        title: "Солярис",
        year: 1972,
        genre: "фантастика",
        duration: 166,
        price: 400,
        description: "Психолог прилетает на станцию над загадочным океаном.",
    },
];

// (first name, last name, birth date)
const ARTISTS: &[(&str, &str, &str)] = &[
    ("Андрей", "Тарковский", "1932-04-04"),
    ("Александр", "Кайдановский", "1946-07-23"),
    ("Владимир", "Меньшов", "1939-09-17"),
    ("Вера", "Алентова", "1942-02-21"),
    ("Алексей", "Балабанов", "1959-02-25"),
    ("Сергей", "Бодров", "1971-12-27"),
];

// (movie index, artist index, role, character)
const CREW: &[(usize, usize, &str, Option<&str>)] = &[
    (0, 0, "Director", None),
    (0, 1, "Actor", Some("Сталкер")),
    (1, 2, "Director", None),
    (1, 3, "Actor", Some("Катерина")),
    (1, 2, "Actor", Some("Эпизод")),
    (2, 4, "Director", None),
    (2, 4, "Screenwriter", None),
    (2, 5, "Actor", Some("Данила Багров")),
    (3, 0, "Director", None),
    (3, 0, "Screenwriter", None),
];

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if movie::Entity::find().count(db).await? > 0 {
        tracing::info!("Catalog already populated, skipping demo data");
        return Ok(());
    }

    // 1. Roles
    let mut role_ids = std::collections::HashMap::new();
    for name in ["Director", "Actor", "Screenwriter"] {
        let model = role::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        role_ids.insert(name, model.id);
    }

    // 2. Movies
    let mut movie_ids = Vec::with_capacity(MOVIES.len());
    for m in MOVIES {
        let model = movie::ActiveModel {
            title: Set(m.title.to_owned()),
            release_year: Set(m.year),
            genre: Set(m.genre.to_owned()),
            duration: Set(m.duration),
            price: Set(m.price),
            description: Set(m.description.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        movie_ids.push(model.id);
    }

    // 3. Artists
    let mut artist_ids = Vec::with_capacity(ARTISTS.len());
    for (first, last, born) in ARTISTS {
        let model = artist::ActiveModel {
            first_name: Set((*first).to_owned()),
            last_name: Set((*last).to_owned()),
            birth_date: Set(Some((*born).to_owned())),
            ..Default::default()
        }
        .insert(db)
        .await?;
        artist_ids.push(model.id);
    }

    // 4. Crew
    for (movie_idx, artist_idx, role_name, character) in CREW {
        movie_crew::ActiveModel {
            movie_id: Set(movie_ids[*movie_idx]),
            artist_id: Set(artist_ids[*artist_idx]),
            role_id: Set(role_ids[role_name]),
            character_name: Set(character.map(str::to_owned)),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    // 5. Demo account
    let password_hash = hash_password("demo").map_err(DbErr::Custom)?;
    let demo = user::ActiveModel {
        username: Set("demo".to_owned()),
        password_hash: Set(password_hash),
        email: Set(Some("demo@videoteka.local".to_owned())),
        registration_date: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    user::Entity::insert(demo)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    tracing::info!(
        movies = movie_ids.len(),
        artists = artist_ids.len(),
        "Demo catalog seeded"
    );
    Ok(())
}
