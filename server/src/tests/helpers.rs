#[cfg(test)]
pub mod tests {
    use actix_web::{
        test,
        web::{self, Data},
        App,
    };
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use db::models::{NewQuestion, NewUser, Question, User};
    use db::{MemoryRepository, QuestionRepository, UserRepository};

    use crate::routes::{not_found, routes};

    pub fn get_repo() -> Data<MemoryRepository> {
        Data::new(MemoryRepository::new())
    }

    pub fn create_user(repo: &MemoryRepository, name: &str) -> User {
        repo.create_user(NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        })
        .unwrap()
    }

    pub fn create_question(repo: &MemoryRepository, user: &User, title: &str) -> Question {
        repo.create_question(NewQuestion::new(user.id, title, "Some details."))
            .unwrap()
    }

    async fn send<R>(repo: &Data<MemoryRepository>, req: test::TestRequest) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(repo.clone())
                .configure(routes::<MemoryRepository>)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(repo: &Data<MemoryRepository>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(repo, test::TestRequest::get().uri(route)).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        repo: &Data<MemoryRepository>,
        route: &str,
        params: T,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(repo, test::TestRequest::post().set_json(&params).uri(route)).await
    }

    /// Helper for HTTP PUT integration tests
    pub async fn test_put<T: Serialize, R>(
        repo: &Data<MemoryRepository>,
        route: &str,
        params: T,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(repo, test::TestRequest::put().set_json(&params).uri(route)).await
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete<R>(repo: &Data<MemoryRepository>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        send(repo, test::TestRequest::delete().uri(route)).await
    }
}
