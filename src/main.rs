use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use drone_inventory::db::establish_connection_pool;
use drone_inventory::models::config::ServerConfig;
use drone_inventory::repository::DieselRepository;
use drone_inventory::routes::{api, centers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::load().map_err(std::io::Error::other)?;

    let pool =
        establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&config.templates_glob).map_err(std::io::Error::other)?;

    let secret_key = Key::generate();
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    log::info!(
        "Starting inventory admin server on {}:{}",
        config.bind_address,
        config.port
    );

    let bind_address = (config.bind_address.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(message_framework.clone())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(centers::index)
            .service(centers::search)
            .service(
                web::scope("/api")
                    .service(api::search_centers)
                    .service(api::create_center)
                    .service(api::update_center)
                    .service(api::delete_center)
                    .service(api::list_center_stocks),
            )
            .service(Files::new("/assets", "./assets"))
    })
    .bind(bind_address)?
    .run()
    .await
}
