use axum::Json;

use crate::models::Message;

pub async fn index() -> Json<Message> {
    Json(Message {
        mensagem: "API para os dados da 13ª Mostra Científica do IFRS – Campus Restinga"
            .to_string(),
    })
}
