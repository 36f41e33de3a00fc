use super::ast::{AssignOp, BinOp, LogicalOp, UnaryOp, UpdateOp};
use crate::lexer::token::TokenKind;

/// Left/right binding powers for infix operators, mirroring standard
/// JavaScript operator precedence. `**` is right-associative.
pub(super) fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::PipePipe | TokenKind::NullishCoalescing => Some((1, 2)),
        TokenKind::AmpAmp => Some((3, 4)),
        TokenKind::Pipe => Some((5, 6)),
        TokenKind::Caret => Some((7, 8)),
        TokenKind::Amp => Some((9, 10)),
        TokenKind::EqEq | TokenKind::NotEq | TokenKind::EqEqEq | TokenKind::NotEqEq => {
            Some((11, 12))
        }
        TokenKind::Less | TokenKind::LessEq | TokenKind::Greater | TokenKind::GreaterEq => {
            Some((13, 14))
        }
        TokenKind::In | TokenKind::Instanceof => Some((13, 14)),
        TokenKind::LessLess | TokenKind::GreaterGreater | TokenKind::GreaterGreaterGreater => {
            Some((15, 16))
        }
        TokenKind::Plus | TokenKind::Minus => Some((17, 18)),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((19, 20)),
        TokenKind::StarStar => Some((22, 21)),
        _ => None,
    }
}

pub(super) fn assign_op(kind: &TokenKind) -> Option<AssignOp> {
    match kind {
        TokenKind::Assign => Some(AssignOp::Assign),
        TokenKind::PlusEquals => Some(AssignOp::Add),
        TokenKind::MinusEquals => Some(AssignOp::Sub),
        TokenKind::StarEquals => Some(AssignOp::Mul),
        TokenKind::SlashEquals => Some(AssignOp::Div),
        TokenKind::PercentEquals => Some(AssignOp::Mod),
        _ => None,
    }
}

pub(super) fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Bang => Some(UnaryOp::Not),
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Tilde => Some(UnaryOp::BitNot),
        TokenKind::Typeof => Some(UnaryOp::Typeof),
        TokenKind::Void => Some(UnaryOp::Void),
        TokenKind::Delete => Some(UnaryOp::Delete),
        _ => None,
    }
}

pub(super) fn update_op(kind: &TokenKind) -> UpdateOp {
    match kind {
        TokenKind::PlusPlus => UpdateOp::Inc,
        TokenKind::MinusMinus => UpdateOp::Dec,
        _ => unreachable!("not an update operator: {:?}", kind),
    }
}

pub(super) fn is_logical_op(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::AmpAmp | TokenKind::PipePipe | TokenKind::NullishCoalescing
    )
}

pub(super) fn token_to_logical_op(kind: &TokenKind) -> LogicalOp {
    match kind {
        TokenKind::AmpAmp => LogicalOp::And,
        TokenKind::PipePipe => LogicalOp::Or,
        TokenKind::NullishCoalescing => LogicalOp::Nullish,
        _ => unreachable!("not a logical operator: {:?}", kind),
    }
}

pub(super) fn token_to_binop(kind: &TokenKind) -> BinOp {
    match kind {
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::Percent => BinOp::Mod,
        TokenKind::StarStar => BinOp::Exp,
        TokenKind::EqEq => BinOp::EqEq,
        TokenKind::NotEq => BinOp::NotEq,
        TokenKind::EqEqEq => BinOp::EqEqEq,
        TokenKind::NotEqEq => BinOp::NotEqEq,
        TokenKind::Less => BinOp::Less,
        TokenKind::LessEq => BinOp::LessEq,
        TokenKind::Greater => BinOp::Greater,
        TokenKind::GreaterEq => BinOp::GreaterEq,
        TokenKind::LessLess => BinOp::Shl,
        TokenKind::GreaterGreater => BinOp::Shr,
        TokenKind::GreaterGreaterGreater => BinOp::UShr,
        TokenKind::Amp => BinOp::BitAnd,
        TokenKind::Pipe => BinOp::BitOr,
        TokenKind::Caret => BinOp::BitXor,
        TokenKind::In => BinOp::In,
        TokenKind::Instanceof => BinOp::Instanceof,
        _ => unreachable!("not a binary operator: {:?}", kind),
    }
}
