use actix_web::{
  http::header::AUTHORIZATION,
  web::{self, Data, Json},
  HttpRequest, HttpResponse,
};
use bcrypt::verify;
use juniper::http::{graphiql::graphiql_source, GraphQLRequest};
use serde_json::json;

use crate::{
  db::users,
  graphql::GQLContext,
  service::{
    jwt::{encode_jwt, verify_jwt, LoginAttempt, TOKEN_LIFETIME_DAYS},
    AppState,
  },
  ApiError,
};

#[derive(Deserialize, Debug)]
pub struct GraphQLData(GraphQLRequest);

#[derive(Deserialize, Debug)]
pub struct LoginData(LoginAttempt);

pub async fn graphiql() -> HttpResponse {
  let html = graphiql_source("/graphql", None);
  HttpResponse::Ok()
    .content_type("text/html; charset=utf-8")
    .body(html)
}

/// Accepts either a bare token or `Bearer <token>`. Anything that does not
/// verify leaves the request anonymous.
fn user_id(req: &HttpRequest, secret: &str) -> Option<i32> {
  let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
  let token = header.strip_prefix("Bearer ").unwrap_or(header);
  match verify_jwt(token, secret) {
    Ok(t) => Some(t.claims.user_id),
    Err(err) => {
      debug!("Ignoring invalid token: {}", err);
      None
    }
  }
}

pub async fn graphql(
  req: HttpRequest,
  Json(GraphQLData(data)): Json<GraphQLData>,
  st: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
  let ctx = GQLContext::new(st.pool.clone(), user_id(&req, &st.jwt_secret));
  let schema = st.schema.clone();

  let body = web::block(move || {
    let res = data.execute_sync(&*schema, &ctx);
    serde_json::to_string(&res)
  })
  .await??;

  Ok(
    HttpResponse::Ok()
      .content_type("application/json")
      .body(body),
  )
}

pub async fn login(
  Json(LoginData(attempt)): Json<LoginData>,
  st: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
  let pool = st.pool.clone();
  let secret = st.jwt_secret.clone();

  let issued = web::block(move || -> Result<Option<(String, i32)>, ApiError> {
    let conn = pool.get()?;
    let user = match users::find_by_email(&conn, &attempt.email)? {
      Some(user) => user,
      None => return Ok(None),
    };
    if !verify(&attempt.password, &user.password)? {
      return Ok(None);
    }
    Ok(Some((encode_jwt(user.id, TOKEN_LIFETIME_DAYS, &secret)?, user.id)))
  })
  .await??;

  match issued {
    Some((token, id)) => {
      info!("User {} logged in", id);
      Ok(HttpResponse::Ok().json(json!({ "token": token, "user_id": id })))
    }
    None => Ok(HttpResponse::Unauthorized().json(json!({ "error": "Login failed" }))),
  }
}
