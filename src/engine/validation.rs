use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок выполнить действие при текущем состоянии ставок.
///
/// Политика no-limit: минимальный открывающий бет = BB (он же min_raise
/// на свежей улице), минимальный рейз = размер предыдущего повышения.
/// Недорейз отклоняется, а не коэрсится – единственный легальный
/// недорейз это явный AllIn.
pub fn validate_action(
    player: &Player,
    action: &PlayerActionKind,
    betting: &BettingState,
) -> Result<(), EngineError> {
    if !player.can_act() {
        return Err(EngineError::IllegalAction);
    }

    let stack = player.stack;
    let to_call = chips_to_call(player, betting);

    match action {
        PlayerActionKind::Fold => Ok(()),

        PlayerActionKind::Check => {
            if betting.current_bet == player.current_bet {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        PlayerActionKind::Call => {
            if to_call.is_zero() {
                Err(EngineError::CannotCall)
            } else {
                // Недостаток стека – не ошибка: это олл-ин колл,
                // обработка в game_loop.
                Ok(())
            }
        }

        PlayerActionKind::Bet(amount) => {
            if !betting.current_bet.is_zero() {
                // Когда ставка уже есть, это raise, а не bet.
                return Err(EngineError::IllegalAction);
            }
            if amount.is_zero() || *amount < betting.min_raise {
                return Err(EngineError::BetTooSmall);
            }
            if stack < *amount {
                return Err(EngineError::NotEnoughChips);
            }
            Ok(())
        }

        PlayerActionKind::Raise(total_bet) => {
            if betting.current_bet.is_zero() {
                // Когда ставки нет – это bet, а не raise.
                return Err(EngineError::IllegalAction);
            }
            if *total_bet <= betting.current_bet {
                return Err(EngineError::IllegalAction);
            }

            let raise_size = *total_bet - betting.current_bet;
            if raise_size < betting.min_raise {
                return Err(EngineError::RaiseTooSmall);
            }

            let diff = *total_bet - player.current_bet;
            if stack < diff {
                return Err(EngineError::NotEnoughChips);
            }

            Ok(())
        }

        PlayerActionKind::AllIn => {
            if stack.is_zero() {
                return Err(EngineError::IllegalAction);
            }
            Ok(())
        }
    }
}

/// Сколько фишек нужно добавить игроку, чтобы уравнять текущую ставку.
pub fn chips_to_call(player: &Player, betting: &BettingState) -> Chips {
    betting.current_bet.saturating_sub(player.current_bet)
}
