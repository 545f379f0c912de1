//! App Router

use salvo::Router;

use crate::orders;

pub(crate) fn orders_router() -> Router {
    Router::with_path("orders")
        .get(orders::index::handler)
        .post(orders::create::handler)
        .push(
            Router::with_path("{id}")
                .get(orders::get::handler)
                .put(orders::update::handler)
                .delete(orders::delete::handler),
        )
}
