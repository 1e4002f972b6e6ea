use crate::{
    actions::ActionContext, error::CliError, param_utils::get_product_slug,
};
use clap::ArgMatches;
use tracing::trace;

pub async fn list_products(context: &ActionContext) -> Result<(), CliError> {
    trace!("Executing 'products' command");
    let products = context.client.products().list().await?;
    context.print(&products)
}

pub async fn print_product(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'product' command");
    let product_slug = get_product_slug(sub_matches)?;
    let product = context.client.products().get(product_slug).await?;
    context.print(&product)
}
