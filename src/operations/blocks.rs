// src/operations/blocks.rs
use super::{log_failure, warn_if_truncated};
use crate::api::NotionRepository;
use crate::error::AppError;
use crate::model::requests::{AppendBlockChildrenRequest, BlockContent, NewBlock};
use crate::model::Block;
use crate::types::BlockId;

/// Appends `blocks` under `parent` (a page id works as a block id).
///
/// Returns the created blocks in order.
pub async fn add_blocks(
    api: &dyn NotionRepository,
    parent: &BlockId,
    blocks: Vec<NewBlock>,
) -> Result<Vec<Block>, AppError> {
    let request = AppendBlockChildrenRequest { children: blocks };

    let created = api
        .append_block_children(parent, &request)
        .await
        .map_err(log_failure("add blocks"))?;
    log::info!("Blocks added successfully");
    Ok(created.results)
}

pub async fn get_child_blocks(
    api: &dyn NotionRepository,
    parent: &BlockId,
) -> Result<Vec<Block>, AppError> {
    let children = api
        .list_block_children(parent)
        .await
        .map_err(log_failure("list blocks"))?;
    log::info!("{} blocks found", children.results.len());
    warn_if_truncated(children.has_more, "blocks");
    Ok(children.results)
}

/// Replaces the content of block `id`. The block's type cannot change.
pub async fn update_block(
    api: &dyn NotionRepository,
    id: &BlockId,
    content: &BlockContent,
) -> Result<Block, AppError> {
    let block = api
        .update_block(id, content)
        .await
        .map_err(log_failure("update block"))?;
    log::info!("Block updated successfully");
    Ok(block)
}

pub async fn delete_block(api: &dyn NotionRepository, id: &BlockId) -> Result<Block, AppError> {
    let block = api
        .delete_block(id)
        .await
        .map_err(log_failure("delete block"))?;
    log::info!("Block deleted successfully");
    Ok(block)
}
