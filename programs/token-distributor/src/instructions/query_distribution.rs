use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTION_RECORD_SEED, DISTRIBUTOR_CONFIG_SEED, SENDER_INDEX_SEED};
use crate::errors::ErrorCode;
use crate::states::{DistributionRecord, DistributorConfig, SenderIndex};
use super::distribution_data::DistributionData;

/// Query instruction to read a distribution record back
#[derive(Accounts)]
pub struct GetDistributionData<'info> {
    /// The account requesting the record
    pub requester: Signer<'info>,

    /// CHECK: Verified against the record PDA for the requested identifier;
    /// may not exist when nothing was recorded under it
    pub distribution_record: UncheckedAccount<'info>,
}

impl<'info> GetDistributionData<'info> {
    pub fn handle(
        ctx: Context<GetDistributionData>,
        confidential_id: [u8; 32],
    ) -> Result<DistributionData> {
        let (expected, _) = Pubkey::find_program_address(
            &[DISTRIBUTION_RECORD_SEED, confidential_id.as_ref()],
            ctx.program_id,
        );
        require_keys_eq!(
            ctx.accounts.distribution_record.key(),
            expected,
            ErrorCode::InvalidDistributionRecord
        );

        // An identifier nothing was recorded under resolves to empty data,
        // not an error.
        if ctx.accounts.distribution_record.data_is_empty() {
            return Ok(DistributionData::default());
        }

        let record_info = ctx.accounts.distribution_record.to_account_info();
        if record_info.owner != &DistributionRecord::owner() {
            return Err(error!(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram));
        }
        let record =
            DistributionRecord::try_deserialize(&mut &record_info.try_borrow_data()?[..])?;

        require_keys_eq!(
            record.sender,
            ctx.accounts.requester.key(),
            ErrorCode::AccessDenied
        );

        Ok(DistributionData {
            sender: record.sender,
            amount: record.amount,
            timestamp: record.timestamp,
        })
    }
}

/// Query instruction to enumerate the caller's own distributions
#[derive(Accounts)]
pub struct GetMyDistributionIds<'info> {
    /// The sender whose index is being read
    pub sender: Signer<'info>,

    /// CHECK: Verified against the caller's own index PDA; may not exist
    /// when the caller has never distributed
    pub sender_index: UncheckedAccount<'info>,
}

impl<'info> GetMyDistributionIds<'info> {
    pub fn handle(ctx: Context<GetMyDistributionIds>) -> Result<Vec<[u8; 32]>> {
        let (expected, _) = Pubkey::find_program_address(
            &[SENDER_INDEX_SEED, ctx.accounts.sender.key().as_ref()],
            ctx.program_id,
        );
        require_keys_eq!(
            ctx.accounts.sender_index.key(),
            expected,
            ErrorCode::InvalidSenderIndex
        );

        if ctx.accounts.sender_index.data_is_empty() {
            return Ok(Vec::new());
        }

        let index_info = ctx.accounts.sender_index.to_account_info();
        if index_info.owner != &SenderIndex::owner() {
            return Err(error!(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram));
        }
        let sender_index =
            SenderIndex::try_deserialize(&mut &index_info.try_borrow_data()?[..])?;

        Ok(sender_index.distribution_ids.clone())
    }
}

/// Query instruction to read the global distribution counter
#[derive(Accounts)]
pub struct GetTotalDistributions<'info> {
    #[account(
        seeds = [DISTRIBUTOR_CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, DistributorConfig>,
}

impl<'info> GetTotalDistributions<'info> {
    pub fn handle(ctx: Context<GetTotalDistributions>) -> Result<u64> {
        Ok(ctx.accounts.config.total_distributions)
    }
}
