//! Usage guide written next to the generated font.

use crate::binding::binding_file_name;

pub fn render_readme(class_name: &str) -> String {
    let binding = binding_file_name(class_name);
    format!(
        "# {class_name} Icons

This folder contains Flutter-compatible icon font files generated with iconfont.

## Files
- `fonts/{class_name}.ttf`: The icon font file
- `{binding}`: Dart class with icon definitions

## Using with Flutter

1. Copy this folder to your Flutter project
2. Add the font to your `pubspec.yaml`:
```yaml
flutter:
  fonts:
    - family: {class_name}
      fonts:
        - asset: fonts/{class_name}.ttf
```
3. Import the icons in your code:
```dart
import 'package:your_package/{binding}';
```
4. Use the icons in your widgets:
```dart
Icon({class_name}.icon_name)
```

## Using with FlutterFlow

1. Open your FlutterFlow project
2. Navigate to Theme Settings (from navigation menu) > Typography & Icons
3. Scroll down to the Custom Icons section
4. Click on the + Add Icons button
5. Click on the Upload Icon File button
6. Select and upload the `{class_name}.ttf` file from the `fonts` directory
7. Click on the Upload Icon Info button
8. Select and upload the `{binding}` file
9. Click Add Icons
10. To use a custom icon:
    - Add the Icon widget to your design
    - In the properties panel, scroll to the Icon section
    - Click on the selected icon
    - Select the Custom Icons tab
    - Choose your icon from the list

## Generated with iconfont
"
    )
}
