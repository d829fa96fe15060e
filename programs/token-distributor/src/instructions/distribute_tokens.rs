use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{DISTRIBUTION_RECORD_SEED, DISTRIBUTOR_CONFIG_SEED, SENDER_INDEX_SEED};
use crate::errors::ErrorCode;
use crate::math::{resolve_confidential_id, split_distribution};
use crate::states::{DistributionRecord, DistributorConfig, SenderIndex};
use super::distribute_native::validate_voice_talent;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeTokensParams {
    /// Gross amount to distribute, in the token's smallest unit
    pub amount: u64,
    /// Confidential id for the record (all zeroes = derive one)
    pub confidential_id: [u8; 32],
}

#[derive(Accounts)]
#[instruction(params: DistributeTokensParams)]
pub struct DistributeTokens<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: Wallet receiving the voice talent share; validated against the
    /// zero address in the handler
    pub voice_talent: UncheckedAccount<'info>,

    /// CHECK: Must be the configured protocol wallet
    #[account(address = config.protocol_wallet @ ErrorCode::InvalidProtocolWallet)]
    pub protocol_wallet: UncheckedAccount<'info>,

    /// CHECK: This is a valid SPL token mint account
    pub token_mint: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = sender
    )]
    pub sender_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = voice_talent
    )]
    pub voice_talent_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = protocol_wallet
    )]
    pub protocol_token_account: Box<Account<'info, TokenAccount>>,

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

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> DistributeTokens<'info> {
    pub fn handle(ctx: Context<DistributeTokens>, params: DistributeTokensParams) -> Result<()> {
        msg!("Processing token distribution from sender: {}", ctx.accounts.sender.key());
        msg!("Token mint: {}", ctx.accounts.token_mint.key());
        msg!("Gross amount: {} units", params.amount);

        validate_voice_talent(&ctx.accounts.voice_talent.key())?;

        let (voice_talent_amount, protocol_amount) = split_distribution(params.amount)?;

        require!(
            ctx.accounts.sender_token_account.amount >= params.amount,
            ErrorCode::InsufficientTokenBalance
        );

        send_tokens(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.sender_token_account.to_account_info(),
            ctx.accounts.voice_talent_token_account.to_account_info(),
            ctx.accounts.sender.to_account_info(),
            voice_talent_amount,
        )?;

        send_tokens(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.sender_token_account.to_account_info(),
            ctx.accounts.protocol_token_account.to_account_info(),
            ctx.accounts.sender.to_account_info(),
            protocol_amount,
        )?;

        msg!("Voice talent share: {} units", voice_talent_amount);
        msg!("Protocol share: {} units", protocol_amount);

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

        msg!("Token distribution completed successfully!");

        emit!(crate::events::TokensDistributed {
            sender: ctx.accounts.sender.key(),
            voice_talent: ctx.accounts.voice_talent.key(),
            token_mint: ctx.accounts.token_mint.key(),
            amount: params.amount,
            voice_talent_amount,
            protocol_amount,
            confidential_id,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}

fn send_tokens<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    anchor_spl::token::transfer(
        CpiContext::new(
            token_program,
            anchor_spl::token::Transfer {
                from,
                to,
                authority,
            },
        ),
        amount,
    )
}
