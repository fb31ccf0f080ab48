use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "qwerty";

pub struct SeededUser {
    pub username: String,
    pub password: String,
}

pub async fn seed_client(conn: &Surreal<Client>) -> SeededUser {
    let user = SeededUser {
        username: "vkuser".to_string(),
        password: "password123".to_string(),
    };

    conn.query(
        "CREATE user CONTENT { \
            username: $username, \
            password: crypto::argon2::generate($password), \
            role: 'client' \
        }",
    )
    .bind(("username", user.username.clone()))
    .bind(("password", user.password.clone()))
    .await
    .unwrap()
    .check()
    .unwrap();

    user
}

pub async fn seed_actor(conn: &Surreal<Client>, name: &str, gender: &str, birthday: &str) -> String {
    let thing: Option<Thing> = conn
        .query(
            "(CREATE actor CONTENT { \
                name: $name, \
                gender: $gender, \
                birthday: <datetime> $birthday \
            } RETURN VALUE id)[0]",
        )
        .bind(("name", name.to_owned()))
        .bind(("gender", gender.to_owned()))
        .bind(("birthday", birthday.to_owned()))
        .await
        .unwrap()
        .take(0)
        .unwrap();

    thing.unwrap().id.to_string()
}

pub async fn seed_movie(
    conn: &Surreal<Client>,
    name: &str,
    release_date: &str,
    rating: f32,
    actors: &[&str],
) -> String {
    let actors: Vec<Thing> = actors
        .iter()
        .map(|id| Thing::from(("actor", *id)))
        .collect();

    let thing: Option<Thing> = conn
        .query(
            "(CREATE movie CONTENT { \
                name: $name, \
                description: $description, \
                release_date: <datetime> $release_date, \
                rating: $rating, \
                actors: $actors \
            } RETURN VALUE id)[0]",
        )
        .bind(("name", name.to_owned()))
        .bind(("description", format!("About {name}")))
        .bind(("release_date", release_date.to_owned()))
        .bind(("rating", rating))
        .bind(("actors", actors))
        .await
        .unwrap()
        .take(0)
        .unwrap();

    thing.unwrap().id.to_string()
}
