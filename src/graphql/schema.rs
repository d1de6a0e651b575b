//! GraphQL schema: object types, query root, and mutation root.

use async_graphql::{Context, EmptySubscription, Object, Result, Schema, SimpleObject};

use crate::domain::entities::{Inventory, NewProduct, Product, Warehouse};
use crate::state::AppState;

/// The executable catalog schema.
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the application state attached as context data.
pub fn build_schema(state: AppState) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// GraphQL representation of a product.
#[derive(SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductObject {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
}

impl From<Product> for ProductObject {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
        }
    }
}

/// GraphQL representation of a warehouse.
#[derive(SimpleObject)]
#[graphql(name = "Warehouse")]
pub struct WarehouseObject {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

impl From<Warehouse> for WarehouseObject {
    fn from(w: Warehouse) -> Self {
        Self {
            id: w.id,
            name: w.name,
            location: w.location,
        }
    }
}

/// GraphQL representation of an inventory row.
///
/// `product` and `warehouse` are resolver fields fetched through the
/// services only when selected.
pub struct InventoryObject {
    inventory: Inventory,
}

impl From<Inventory> for InventoryObject {
    fn from(inventory: Inventory) -> Self {
        Self { inventory }
    }
}

#[Object(name = "Inventory")]
impl InventoryObject {
    async fn id(&self) -> i64 {
        self.inventory.id
    }

    async fn quantity(&self) -> i32 {
        self.inventory.quantity
    }

    async fn product_id(&self) -> i64 {
        self.inventory.product_id
    }

    async fn warehouse_id(&self) -> i64 {
        self.inventory.warehouse_id
    }

    /// The product this row holds stock for.
    async fn product(&self, ctx: &Context<'_>) -> Result<ProductObject> {
        let state = ctx.data_unchecked::<AppState>();
        let product = state
            .product_service
            .get_product(self.inventory.product_id)
            .await?;
        Ok(product.into())
    }

    /// The warehouse holding the stock.
    async fn warehouse(&self, ctx: &Context<'_>) -> Result<WarehouseObject> {
        let state = ctx.data_unchecked::<AppState>();
        let warehouse = state
            .warehouse_service
            .get_warehouse(self.inventory.warehouse_id)
            .await?;
        Ok(warehouse.into())
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetches a single product by id.
    ///
    /// Fails with a `not_found` error when the id does not resolve.
    async fn product(&self, ctx: &Context<'_>, id: i64) -> Result<ProductObject> {
        let state = ctx.data_unchecked::<AppState>();
        let product = state.product_service.get_product(id).await?;
        Ok(product.into())
    }

    /// Lists inventory rows for a product.
    ///
    /// Returns an empty list, not an error, when the product has no rows.
    async fn inventories(
        &self,
        ctx: &Context<'_>,
        product_id: i64,
    ) -> Result<Vec<InventoryObject>> {
        let state = ctx.data_unchecked::<AppState>();
        let rows = state.inventory_service.list_for_product(product_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a product and returns the stored representation.
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        price: Option<f64>,
    ) -> Result<ProductObject> {
        let state = ctx.data_unchecked::<AppState>();
        let product = state
            .product_service
            .create(NewProduct {
                name,
                description,
                price,
            })
            .await?;
        Ok(product.into())
    }
}
