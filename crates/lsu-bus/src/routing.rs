//! Delivers one occurrence to the contract method that handles its kind.

use lsu_types::EventMut;

use crate::contracts::HandlerResult;
use crate::listener::Listener;

/// Invoke the handler for `event` on `listener`.
///
/// A listener that does not fulfill the owning contract is left alone. The
/// dispatch table only lists listeners under kinds of contracts they
/// fulfill, so that branch is reached only through composition changing its
/// manifest after registration.
pub(crate) fn deliver(listener: &dyn Listener, event: EventMut<'_>) -> HandlerResult {
    match event {
        EventMut::ClientAttack(event) => listener
            .as_combat()
            .map_or(Ok(()), |l| l.on_client_attack(event)),
        EventMut::DamageConfirmed(event) => listener
            .as_combat()
            .map_or(Ok(()), |l| l.on_damage_confirmed(event)),
        EventMut::PlayerDamaged(event) => listener
            .as_combat()
            .map_or(Ok(()), |l| l.on_player_damaged(event)),
        EventMut::ChatMessageReceived(event) => listener
            .as_chat()
            .map_or(Ok(()), |l| l.on_chat_message_received(event)),
        EventMut::ChatMessageSent(event) => listener
            .as_chat()
            .map_or(Ok(()), |l| l.on_chat_message_sent(event)),
        EventMut::ClientTick(event) => listener
            .as_tick()
            .map_or(Ok(()), |l| l.on_client_tick(event)),
        EventMut::ServerChange(event) => listener
            .as_server()
            .map_or(Ok(()), |l| l.on_server_change(event)),
        EventMut::ShardSwap(event) => listener
            .as_server()
            .map_or(Ok(()), |l| l.on_shard_swap(event)),
        EventMut::ItemRender(event) => listener
            .as_render()
            .map_or(Ok(()), |l| l.on_item_render(event)),
        EventMut::PlayerNameRender(event) => listener
            .as_render()
            .map_or(Ok(()), |l| l.on_player_name_render(event)),
        EventMut::TitleScreenInit(event) => listener
            .as_ui()
            .map_or(Ok(()), |l| l.on_title_screen_init(event)),
        EventMut::SplashTextRequest(event) => listener
            .as_ui()
            .map_or(Ok(()), |l| l.on_splash_text_request(event)),
        EventMut::CommandSent(event) => listener
            .as_command()
            .map_or(Ok(()), |l| l.on_command_sent(event)),
    }
}
