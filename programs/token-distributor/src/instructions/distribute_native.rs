use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTION_RECORD_SEED, DISTRIBUTOR_CONFIG_SEED, SENDER_INDEX_SEED};
use crate::errors::ErrorCode;
use crate::math::{resolve_confidential_id, split_distribution};
use crate::states::{DistributionRecord, DistributorConfig, SenderIndex};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeNativeParams {
    /// Gross amount to distribute, in lamports
    pub amount: u64,
    /// Confidential id for the record (all zeroes = derive one)
    pub confidential_id: [u8; 32],
}

#[derive(Accounts)]
#[instruction(params: DistributeNativeParams)]
pub struct DistributeNative<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: Lamport recipient only; validated against the zero address in the handler
    #[account(mut)]
    pub voice_talent: UncheckedAccount<'info>,

    /// CHECK: Lamport recipient only; must be the configured protocol wallet
    #[account(
        mut,
        address = config.protocol_wallet @ ErrorCode::InvalidProtocolWallet
    )]
    pub protocol_wallet: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, DistributorConfig>,

    #[account(
        init_if_needed,
        payer = sender,
        space = SenderIndex::DISCRIMINATOR.len() + SenderIndex::INIT_SPACE,
        seeds = [SENDER_INDEX_SEED, sender.key().as_ref()],
        bump
    )]
    pub sender_index: Account<'info, SenderIndex>,

    /// Receipt for this distribution. `init` makes identifier reuse fail the
    /// whole transaction instead of overwriting an existing record.
    #[account(
        init,
        payer = sender,
        space = DistributionRecord::DISCRIMINATOR.len() + DistributionRecord::INIT_SPACE,
        seeds = [
            DISTRIBUTION_RECORD_SEED,
            resolve_confidential_id(
                &params.confidential_id,
                &sender.key(),
                sender_index.next_nonce()
            ).as_ref()
        ],
        bump
    )]
    pub distribution_record: Account<'info, DistributionRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> DistributeNative<'info> {
    pub fn handle(ctx: Context<DistributeNative>, params: DistributeNativeParams) -> Result<()> {
        msg!("Processing native distribution from sender: {}", ctx.accounts.sender.key());
        msg!("Gross amount: {} lamports", params.amount);

        validate_voice_talent(&ctx.accounts.voice_talent.key())?;

        let (voice_talent_amount, protocol_amount) = split_distribution(params.amount)?;

        send_lamports(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.sender.to_account_info(),
            ctx.accounts.voice_talent.to_account_info(),
            voice_talent_amount,
        )?;

        send_lamports(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.sender.to_account_info(),
            ctx.accounts.protocol_wallet.to_account_info(),
            protocol_amount,
        )?;

        msg!("Voice talent share: {} lamports", voice_talent_amount);
        msg!("Protocol share: {} lamports", protocol_amount);

        let confidential_id = resolve_confidential_id(
            &params.confidential_id,
            &ctx.accounts.sender.key(),
            ctx.accounts.sender_index.next_nonce(),
        );

        let clock = Clock::get()?;

        let record = &mut ctx.accounts.distribution_record;
        record.sender = ctx.accounts.sender.key();
        record.amount = params.amount;
        record.timestamp = clock.unix_timestamp;
        record.bump = ctx.bumps.distribution_record;

        let sender_index = &mut ctx.accounts.sender_index;
        if sender_index.distribution_ids.is_empty() {
            sender_index.sender = ctx.accounts.sender.key();
            sender_index.bump = ctx.bumps.sender_index;
        }
        sender_index.append(confidential_id)?;

        ctx.accounts.config.record_distribution()?;

        msg!("Native distribution completed successfully!");

        emit!(crate::events::TokensDistributed {
            sender: ctx.accounts.sender.key(),
            voice_talent: ctx.accounts.voice_talent.key(),
            token_mint: Pubkey::default(),
            amount: params.amount,
            voice_talent_amount,
            protocol_amount,
            confidential_id,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

pub(crate) fn validate_voice_talent(voice_talent: &Pubkey) -> Result<()> {
    require!(
        *voice_talent != Pubkey::default(),
        ErrorCode::InvalidVoiceTalentAddress
    );

    Ok(())
}

fn send_lamports<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program,
            anchor_lang::system_program::Transfer { from, to },
        ),
        amount,
    )
}
