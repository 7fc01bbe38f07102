// src/main.rs
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, middleware, web};
use dotenvy::dotenv;
use mongodb::Client;
use mongodb::bson::doc;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use camp_school_api::store::Store;
use camp_school_api::{AppState, api, docs};

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Summer camp school server is running")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let mongodb_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let db_name = env::var("DB_NAME").unwrap_or_else(|_| "summer_camp_school".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let stripe_secret_key = env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY required");

    let client = Client::with_uri_str(&mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&db_name);
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("MongoDB ping failed");
    log::info!("connected to MongoDB database {db_name}");

    let state = web::Data::new(AppState {
        store: Store::new(db),
        stripe_secret_key,
    });

    log::info!("Summer camp school server listening on port {port}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(index))
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
            )
            .service(api::users::login_user)
            .service(api::users::manage_users)
            .service(api::users::update_role_admin)
            .service(api::users::update_role_instructor)
            .service(api::users::delete_user)
            .service(api::users::home_instructors)
            .service(api::users::all_instructors)
            .service(api::courses::home_courses)
            .service(api::courses::all_courses)
            .service(api::courses::add_course)
            .service(api::courses::my_courses)
            .service(api::courses::update_course_data)
            .service(api::courses::approve_course)
            .service(api::courses::deny_course)
            .service(api::courses::course_feedback)
            .service(api::courses::delete_course)
            .service(api::selections::add_selected_course)
            .service(api::selections::selected_courses_by_email)
            .service(api::selections::delete_selected_course)
            .service(api::payments::create_payment_intent)
            .service(api::payments::payment_info)
            .service(api::payments::available_seat_decrement)
            .service(api::payments::enrolled_courses)
            .service(api::payments::payment_history)
            .service(api::messages::create_message)
            .service(api::messages::mark_message_seen)
            .service(api::messages::delete_message)
            .service(api::dashboard::admin_stats)
            .service(api::dashboard::instructor_stats)
            .service(api::dashboard::student_stats)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
