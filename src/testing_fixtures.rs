//! Markup fixtures shared across test modules.

/// A rendered restaurant page with one day, one station and a duplicated
/// meal slot.
pub const SNAPSHOT: &str = r#"<html><body>
<h1 data-epi-property-name="Title">Assarin Ullakko</h1>
<div class="lunch-day">
  <h4>Mon 16.6.</h4>
  <p>Lunch served 10.30–14.00</p>
  <div class="lunch-menu-block__menu-package">
    <h5>Station 1-2</h5>
    <p>3,10 / 7,70 / 9,20 €</p>
    <div class="meal-item">
      <div class="meal-item--name-container">
        <span>Soup</span>
        <p>A, G, Veg</p>
      </div>
      <table>
        <tr><td>Per 100g</td></tr>
        <tr><td>Energy</td><td>754 kJ, 180 kcal</td></tr>
        <tr><td>Protein</td><td>12 g</td></tr>
        <tr><td>Saturated fat</td><td>2 g</td></tr>
      </table>
    </div>
    <div class="meal-item">
      <div class="meal-item--name-container">
        <span>Soup</span>
        <p>G</p>
      </div>
    </div>
  </div>
</div>
</body></html>"#;
