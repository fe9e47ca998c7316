use actix_web::{web, HttpResponse, Responder};
use types::PoolConfig;

use crate::error::Error;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Serves the resolved pool list in priority order.
pub async fn pools(pools: web::Data<Vec<PoolConfig>>) -> impl Responder {
    HttpResponse::Ok().json(pools.as_ref())
}

/// Serves a single pool looked up by its priority.
pub async fn pool(pools: web::Data<Vec<PoolConfig>>, path: web::Path<usize>) -> impl Responder {
    let priority = path.into_inner();
    match find_pool(pools.as_ref(), priority) {
        Ok(pool) => HttpResponse::Ok().json(pool),
        Err(err) => {
            log::error!("{:?}", err);
            let http_response: HttpResponse = err.into();
            http_response
        }
    }
}

fn find_pool(pools: &[PoolConfig], priority: usize) -> Result<&PoolConfig, Error> {
    pools.get(priority).ok_or(Error::PoolDoesNotExist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with_priority(priority: usize) -> PoolConfig {
        PoolConfig {
            name: format!("pool-{}", priority),
            host: format!("host-{}.com", priority),
            username: "unknown".to_string(),
            password: "x".to_string(),
            extranonce_subscribe_enabled: true,
            number_of_submit: 1,
            priority,
            connection_retry_delay: 5,
            reconnect_stability_period: 30,
        }
    }

    #[test]
    fn find_pool_by_priority() {
        let pools = vec![pool_with_priority(0), pool_with_priority(1)];
        let pool = find_pool(&pools, 1).unwrap();
        assert_eq!(pool.host, "host-1.com");
    }

    #[test]
    fn find_pool_out_of_range() {
        let pools = vec![pool_with_priority(0)];
        assert!(matches!(find_pool(&pools, 1), Err(Error::PoolDoesNotExist)));
    }
}
