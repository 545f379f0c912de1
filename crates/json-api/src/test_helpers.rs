//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use orderdesk_app::{context::AppContext, domain::orders::MockOrdersService};

use crate::state::State;

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        orders: Arc::new(orders),
    }))
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .push(route),
    )
}
