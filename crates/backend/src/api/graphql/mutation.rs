use async_graphql::{Context, Object, Result};
use contracts::domain::order::OrderWithDetailsRequest;
use sea_orm::DatabaseConnection;

use super::inputs::{OrderDetailInput, OrderInput};
use super::types::Order;
use crate::domain::order::service;

pub struct MutationRoot;

/// Write side of the schema. Each mutation wraps the corresponding workflow
/// service call; a failed envelope collapses to `null` (or `false` for
/// delete) rather than a GraphQL error.
#[Object]
impl MutationRoot {
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        order: OrderInput,
        order_details: Vec<OrderDetailInput>,
    ) -> Result<Option<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let request = OrderWithDetailsRequest {
            order: order.into_header(0),
            order_details: order_details.into_iter().map(Into::into).collect(),
        };
        let response = service::create_order(db, request).await;
        Ok(response.data.map(Into::into))
    }

    async fn update_order(
        &self,
        ctx: &Context<'_>,
        order_id: i32,
        order: OrderInput,
        order_details: Vec<OrderDetailInput>,
    ) -> Result<Option<Order>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let request = OrderWithDetailsRequest {
            order: order.into_header(order_id),
            order_details: order_details.into_iter().map(Into::into).collect(),
        };
        let response = service::update_order(db, request).await;
        Ok(response.data.map(Into::into))
    }

    async fn delete_order(&self, ctx: &Context<'_>, order_id: i32) -> Result<bool> {
        let db = ctx.data::<DatabaseConnection>()?;
        let response = service::delete_order(db, order_id).await;
        Ok(response.succeeded)
    }
}
