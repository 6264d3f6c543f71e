use krb_types::{EncTicketPart, KdcOptions, KerberosError, TicketFlags};

use crate::config::TgsConfig;

/// One row of the option → flag table driving the bulk of stage 9's flag algebra. Each rule is
/// independent of the others; `apply_flag_rules` walks the table once in order.
struct FlagRule {
    option: KdcOptions,
    policy_allowed: fn(&TgsConfig) -> bool,
    required_tgt_flag: TicketFlags,
    resulting_flag: TicketFlags,
    copies_addresses: bool,
}

const RULES: &[FlagRule] = &[
    FlagRule {
        option: KdcOptions::FORWARDABLE,
        policy_allowed: |c| c.forwardable_allowed,
        required_tgt_flag: TicketFlags::FORWARDABLE,
        resulting_flag: TicketFlags::FORWARDABLE,
        copies_addresses: false,
    },
    FlagRule {
        option: KdcOptions::FORWARDED,
        policy_allowed: |c| c.forwardable_allowed,
        required_tgt_flag: TicketFlags::FORWARDABLE,
        resulting_flag: TicketFlags::FORWARDED,
        copies_addresses: true,
    },
    FlagRule {
        option: KdcOptions::PROXIABLE,
        policy_allowed: |c| c.proxiable_allowed,
        required_tgt_flag: TicketFlags::PROXIABLE,
        resulting_flag: TicketFlags::PROXIABLE,
        copies_addresses: false,
    },
    FlagRule {
        option: KdcOptions::PROXY,
        policy_allowed: |c| c.proxiable_allowed,
        required_tgt_flag: TicketFlags::PROXIABLE,
        resulting_flag: TicketFlags::PROXY,
        copies_addresses: true,
    },
    FlagRule {
        option: KdcOptions::ALLOW_POSTDATE,
        policy_allowed: |c| c.postdated_allowed,
        required_tgt_flag: TicketFlags::MAY_POSTDATE,
        resulting_flag: TicketFlags::MAY_POSTDATE,
        copies_addresses: false,
    },
    FlagRule {
        option: KdcOptions::POSTDATED,
        policy_allowed: |c| c.postdated_allowed,
        required_tgt_flag: TicketFlags::MAY_POSTDATE,
        resulting_flag: TicketFlags::POSTDATED,
        copies_addresses: false,
    },
];

pub(crate) struct FlagOutcome {
    pub(crate) flags: TicketFlags,
    pub(crate) client_addresses: Vec<krb_types::HostAddress>,
}

/// Computes the new ticket's flags from the requested options, the TGT's capability flags, and
/// policy, per stage 9's "flag algebra" rules. Addresses start as the TGT's own and may be
/// overwritten by `FORWARDED`/`PROXY`.
pub(crate) fn apply_flag_rules(
    config: &TgsConfig,
    kdc_options: KdcOptions,
    tgt_body: &EncTicketPart,
    requested_addresses: &[krb_types::HostAddress],
) -> Result<FlagOutcome, KerberosError> {
    let mut flags = TicketFlags::empty();
    let mut client_addresses = tgt_body.client_addresses.clone();

    if tgt_body.flags.contains(TicketFlags::PRE_AUTHENT) {
        flags |= TicketFlags::PRE_AUTHENT;
    }
    if tgt_body.flags.contains(TicketFlags::FORWARDED) {
        flags |= TicketFlags::FORWARDED;
    }

    for rule in RULES {
        if !kdc_options.contains(rule.option) {
            continue;
        }

        if !(rule.policy_allowed)(config) {
            tracing::debug!(option = ?rule.option, "option rejected by policy");
            return Err(KerberosError::Policy);
        }

        if !tgt_body.flags.contains(rule.required_tgt_flag) {
            tracing::debug!(option = ?rule.option, "TGT lacks required capability flag");
            return Err(KerberosError::BadOption);
        }

        flags |= rule.resulting_flag;

        if rule.copies_addresses {
            if !requested_addresses.is_empty() {
                client_addresses = requested_addresses.to_vec();
            } else if !config.empty_addresses_allowed {
                return Err(KerberosError::Policy);
            }
        }
    }

    if kdc_options.contains(KdcOptions::POSTDATED) {
        flags |= TicketFlags::INVALID;
    }

    Ok(FlagOutcome { flags, client_addresses })
}
