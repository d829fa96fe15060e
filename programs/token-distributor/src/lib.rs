use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod math;

#[cfg(test)]
mod tests;

pub use instructions::*;
pub use events::*;

#[program]
pub mod token_distributor {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        Initialize::handle(ctx, params)
    }

    pub fn distribute_native(
        ctx: Context<DistributeNative>,
        params: DistributeNativeParams,
    ) -> Result<()> {
        DistributeNative::handle(ctx, params)
    }

    pub fn distribute_tokens(
        ctx: Context<DistributeTokens>,
        params: DistributeTokensParams,
    ) -> Result<()> {
        DistributeTokens::handle(ctx, params)
    }

    pub fn get_distribution_data(
        ctx: Context<GetDistributionData>,
        confidential_id: [u8; 32],
    ) -> Result<DistributionData> {
        GetDistributionData::handle(ctx, confidential_id)
    }

    pub fn get_my_distribution_ids(ctx: Context<GetMyDistributionIds>) -> Result<Vec<[u8; 32]>> {
        GetMyDistributionIds::handle(ctx)
    }

    pub fn get_total_distributions(ctx: Context<GetTotalDistributions>) -> Result<u64> {
        GetTotalDistributions::handle(ctx)
    }
}
