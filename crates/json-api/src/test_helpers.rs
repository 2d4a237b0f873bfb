//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use larder_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        collections::MockCollectionsService, ingredients::MockIngredientsService,
        recipes::MockRecipesService, shopping_list::MockShoppingListService,
        short_links::MockShortLinksService, subscriptions::MockSubscriptionsService,
        tags::MockTagsService, users::MockUsersService, users::records::UserUuid,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// One mock per service. Any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) users: MockUsersService,
    pub(crate) tags: MockTagsService,
    pub(crate) ingredients: MockIngredientsService,
    pub(crate) recipes: MockRecipesService,
    pub(crate) collections: MockCollectionsService,
    pub(crate) shopping_list: MockShoppingListService,
    pub(crate) short_links: MockShortLinksService,
    pub(crate) subscriptions: MockSubscriptionsService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            users: Arc::new(self.users),
            tags: Arc::new(self.tags),
            ingredients: Arc::new(self.ingredients),
            recipes: Arc::new(self.recipes),
            collections: Arc::new(self.collections),
            shopping_list: Arc::new(self.shopping_list),
            short_links: Arc::new(self.short_links),
            subscriptions: Arc::new(self.subscriptions),
        })
    }
}

/// A service whose requests are authenticated as [`TEST_USER_UUID`].
pub(crate) fn member_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_user)
            .push(route),
    )
}

/// A service whose requests carry no user.
pub(crate) fn anonymous_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}
